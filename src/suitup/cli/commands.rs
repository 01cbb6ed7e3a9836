//! CLI dispatch layer.
//!
//! The only place in the codebase that touches terminal I/O: it parses
//! arguments, resolves the catalog directory, calls the API facade, and
//! renders the structured results. Business logic lives below the facade
//! and never prints.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use suitup::api::CatalogApi;
use suitup::commands::company::CompanyUpdate;
use suitup::commands::list::{BucketFilter, ListFilter};
use suitup::error::Result;
use suitup::model::SuitRecord;
use suitup::store::fs::FileStore;
use suitup::validation::SuitDraft;

use super::mask;
use super::print::{print_company, print_messages, print_reminders, print_suits};
use super::setup::{Bucket, Cli, Commands, RentalArgs};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let store = FileStore::new(resolve_catalog_dir(&cli));
    let mut api = CatalogApi::new(store);

    match cli.command {
        Some(Commands::List { bucket, search }) => handle_list(&api, bucket, search, today),
        Some(Commands::Reminders) => handle_reminders(&api, today),
        Some(Commands::Add {
            code,
            name,
            photo,
            purchase_date,
            suit_price,
            rental_price,
            rental,
            returned,
        }) => {
            let draft = SuitDraft {
                code,
                name,
                photo_url: photo,
                purchase_date: purchase_date.unwrap_or_default(),
                suit_price,
                rental_price,
                is_returned: returned,
                ..rental_fields(rental)
            };
            let result = api.add_suit(draft, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Edit {
            code,
            name,
            new_code,
            photo,
            purchase_date,
            suit_price,
            rental_price,
            rental,
            clear_rental,
        }) => {
            let suit = api.get_suit(&code, today)?;
            let mut draft = draft_from(&suit);

            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(new_code) = new_code {
                draft.code = new_code;
            }
            if let Some(photo) = photo {
                draft.photo_url = photo;
            }
            if let Some(purchase_date) = purchase_date {
                draft.purchase_date = purchase_date;
            }
            if let Some(price) = suit_price {
                draft.suit_price = price;
            }
            if let Some(price) = rental_price {
                draft.rental_price = price;
            }

            if clear_rental {
                draft.customer_name = String::new();
                draft.customer_phone = String::new();
                draft.customer_email = String::new();
                draft.delivery_date = String::new();
                draft.return_date = String::new();
                draft.observations = String::new();
                draft.is_returned = false;
            } else {
                apply_rental_overrides(&mut draft, rental);
            }

            let result = api.update_suit(&code, draft, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { code }) => {
            let result = api.delete_suit(&code, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Return { code }) => {
            let result = api.set_returned(&code, true, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Unreturn { code }) => {
            let result = api.set_returned(&code, false, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let path = output.unwrap_or_else(|| PathBuf::from("suit_catalog.csv"));
            let result = api.export_catalog(&path, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Receipt { code, output }) => {
            let result = api.generate_receipt(&code, output.as_deref(), today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Seed { force }) => {
            let result = api.seed(force, today)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Company {
            name,
            street,
            number,
            complement,
            neighborhood,
            city,
            state,
            zip,
            phone,
            email,
            cnpj,
            logo,
            show_cnpj,
            show_address,
        }) => {
            let update = CompanyUpdate {
                name,
                address_street: street,
                address_number: number,
                address_complement: complement,
                address_neighborhood: neighborhood,
                address_city: city,
                address_state: state,
                address_zip: zip.map(|z| mask::format_cep(&z)),
                phone: phone.map(|p| mask::format_company_phone(&p)),
                email,
                cnpj: cnpj.map(|c| mask::format_cnpj(&c)),
                logo_url: logo,
                show_cnpj_on_receipt: show_cnpj,
                show_address_on_receipt: show_address,
            };
            let result = api.company(update)?;
            print_messages(&result.messages);
            if let Some(profile) = &result.company {
                print_company(profile);
            }
            Ok(())
        }
        None => handle_list(&api, Bucket::Available, None, today),
    }
}

fn handle_list(
    api: &CatalogApi<FileStore>,
    bucket: Bucket,
    search: Option<String>,
    today: NaiveDate,
) -> Result<()> {
    let filter = ListFilter {
        bucket: bucket_filter(bucket),
        search,
    };
    let result = api.list_suits(filter, today)?;
    print_suits(&result.listed_suits, today);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reminders(api: &CatalogApi<FileStore>, today: NaiveDate) -> Result<()> {
    let result = api.reminders(today)?;
    print_reminders(&result.listed_suits, today);
    print_messages(&result.messages);
    Ok(())
}

fn bucket_filter(bucket: Bucket) -> BucketFilter {
    match bucket {
        Bucket::Available => BucketFilter::Available,
        Bucket::Rented => BucketFilter::Rented,
        Bucket::Overdue => BucketFilter::Overdue,
        Bucket::Returned => BucketFilter::Returned,
        Bucket::All => BucketFilter::All,
    }
}

fn rental_fields(rental: RentalArgs) -> SuitDraft {
    SuitDraft {
        customer_name: rental.customer.unwrap_or_default(),
        customer_phone: rental
            .phone
            .map(|p| mask::format_phone(&p))
            .unwrap_or_default(),
        customer_email: rental.email.unwrap_or_default(),
        delivery_date: rental.delivery.unwrap_or_default(),
        return_date: rental.return_date.unwrap_or_default(),
        observations: rental.observations.unwrap_or_default(),
        ..Default::default()
    }
}

fn apply_rental_overrides(draft: &mut SuitDraft, rental: RentalArgs) {
    if let Some(customer) = rental.customer {
        draft.customer_name = customer;
    }
    if let Some(phone) = rental.phone {
        draft.customer_phone = mask::format_phone(&phone);
    }
    if let Some(email) = rental.email {
        draft.customer_email = email;
    }
    if let Some(delivery) = rental.delivery {
        draft.delivery_date = delivery;
    }
    if let Some(return_date) = rental.return_date {
        draft.return_date = return_date;
    }
    if let Some(observations) = rental.observations {
        draft.observations = observations;
    }
}

fn draft_from(suit: &SuitRecord) -> SuitDraft {
    SuitDraft {
        id: Some(suit.id.to_string()),
        code: suit.code.clone(),
        name: suit.name.clone(),
        photo_url: suit.photo_url.clone(),
        purchase_date: suit.purchase_date.clone(),
        suit_price: suit.suit_price,
        rental_price: suit.rental_price,
        delivery_date: suit.delivery_date.clone().unwrap_or_default(),
        return_date: suit.return_date.clone().unwrap_or_default(),
        observations: suit.observations.clone().unwrap_or_default(),
        customer_name: suit.customer_name.clone().unwrap_or_default(),
        customer_phone: suit.customer_phone.clone().unwrap_or_default(),
        customer_email: suit.customer_email.clone().unwrap_or_default(),
        is_returned: suit.is_returned,
    }
}

fn resolve_catalog_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.catalog_dir {
        return dir.clone();
    }
    directories::ProjectDirs::from("br", "suitup", "suitup")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".suitup"))
}
