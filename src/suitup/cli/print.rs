use chrono::NaiveDate;
use colored::Colorize;
use suitup::classify::{self, days_remaining_text, RentalStatus};
use suitup::commands::{CmdMessage, MessageLevel};
use suitup::company::CompanyProfile;
use suitup::model::SuitRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const STATUS_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_suits(suits: &[SuitRecord], today: NaiveDate) {
    if suits.is_empty() {
        println!("Nenhum terno encontrado.");
        return;
    }

    for suit in suits {
        let status = classify::status_of(suit, today);

        let code = format!("{:<6}", suit.code);
        let price = format!("R$ {:>8}", format!("{:.2}", suit.rental_price).replace('.', ","));

        let fixed = 2 + code.width() + 1 + price.len() + 2 + STATUS_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let name = truncate_to_width(&suit.name, available);
        let padding = available.saturating_sub(name.width());

        let status_label = format!("{:>width$}", status.label(), width = STATUS_WIDTH);
        let status_colored = match status {
            RentalStatus::Available => status_label.green(),
            RentalStatus::RentedActive => status_label.yellow(),
            RentalStatus::Overdue => status_label.red(),
            RentalStatus::Returned => status_label.dimmed(),
        };

        println!(
            "  {} {}{} {}  {}",
            code.yellow(),
            name,
            " ".repeat(padding),
            price,
            status_colored
        );

        if let Some(customer) = &suit.customer_name {
            let mut details = format!("Cliente: {}", customer);
            if let Some(due) = &suit.return_date {
                details.push_str(&format!("  Devolução: {}", due));
                if !suit.is_returned {
                    let remaining = days_remaining_text(Some(due), today);
                    if !remaining.is_empty() {
                        details.push_str(&format!(" ({})", remaining));
                    }
                }
            }
            if let Some(obs) = &suit.observations {
                details.push_str(&format!("  Obs: {}", obs));
            }
            println!("         {}", details.dimmed());
        }
    }
}

pub(super) fn print_reminders(suits: &[SuitRecord], today: NaiveDate) {
    if suits.is_empty() {
        return;
    }

    println!("{}", "Lembretes de Devolução (Hoje ou Amanhã)".bold());
    for suit in suits {
        println!("  {} {}", suit.code.yellow(), suit.name.bold());
        if let Some(customer) = &suit.customer_name {
            println!("         Cliente: {}", customer);
        }
        if let Some(due) = &suit.return_date {
            let remaining = days_remaining_text(Some(due), today);
            println!("         Devolução: {} ({})", due.red(), remaining);
        }
        if let Some(phone) = &suit.customer_phone {
            println!("         Telefone: {}", phone);
        }
    }
}

pub(super) fn print_company(profile: &CompanyProfile) {
    println!("{}", profile.display_name().bold());
    let address = profile.address_line();
    if !address.is_empty() {
        println!("  Endereço: {}", address);
    }
    if !profile.phone.is_empty() {
        println!("  Telefone: {}", profile.phone);
    }
    if !profile.email.is_empty() {
        println!("  Email:    {}", profile.email);
    }
    if let Some(cnpj) = &profile.cnpj {
        println!("  CNPJ:     {}", cnpj);
    }
    if let Some(logo) = &profile.logo_url {
        println!("  Logo:     {}", logo);
    }
    println!(
        "  Recibo:   CNPJ {} · endereço {}",
        enabled(profile.show_cnpj_on_receipt),
        enabled(profile.show_address_on_receipt)
    );
}

fn enabled(on: bool) -> &'static str {
    if on {
        "visível"
    } else {
        "oculto"
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
