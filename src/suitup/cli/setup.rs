use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "suitup",
    bin_name = "suitup",
    version,
    about = "Catálogo de ternos para aluguel na linha de comando",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Diretório do catálogo (catalog.json e company.json)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Bucket {
    /// Disponíveis para aluguel
    Available,
    /// Alugados, dentro do prazo
    Rented,
    /// Devolução em atraso
    Overdue,
    /// Devolvidos (histórico)
    Returned,
    /// Todos os ternos
    All,
}

/// Rental attachment flags shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct RentalArgs {
    /// Nome do cliente
    #[arg(long)]
    pub customer: Option<String>,

    /// Telefone do cliente; dígitos são formatados como (XX) XXXXX-XXXX
    #[arg(long)]
    pub phone: Option<String>,

    /// E-mail do cliente
    #[arg(long)]
    pub email: Option<String>,

    /// Data de entrega
    #[arg(long, value_name = "AAAA-MM-DD")]
    pub delivery: Option<String>,

    /// Data de devolução
    #[arg(long = "return", value_name = "AAAA-MM-DD")]
    pub return_date: Option<String>,

    /// Observações
    #[arg(long)]
    pub observations: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List suits by lifecycle bucket
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Which view to list
        #[arg(short, long, value_enum, default_value_t = Bucket::Available)]
        bucket: Bucket,

        /// Filtrar pelo nome (busca parcial, sem diferenciar maiúsculas)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Returns due today or tomorrow
    #[command(display_order = 2)]
    Reminders,

    /// Add a suit to the catalog
    #[command(alias = "new", display_order = 3)]
    Add {
        /// Código do terno (ex: S001)
        #[arg(long)]
        code: String,

        /// Nome do terno
        #[arg(long)]
        name: String,

        /// Referência da foto (URL)
        #[arg(long, default_value = "")]
        photo: String,

        /// Data da compra; hoje quando omitida
        #[arg(long, value_name = "AAAA-MM-DD")]
        purchase_date: Option<String>,

        /// Preço do terno (R$)
        #[arg(long, default_value_t = 0.0)]
        suit_price: f64,

        /// Preço do aluguel (R$)
        #[arg(long, default_value_t = 0.0)]
        rental_price: f64,

        #[command(flatten)]
        rental: RentalArgs,

        /// Marcar o aluguel como já devolvido
        #[arg(long)]
        returned: bool,
    },

    /// Edit a suit selected by its code
    #[command(display_order = 4)]
    Edit {
        /// Código do terno a editar
        code: String,

        #[arg(long)]
        name: Option<String>,

        /// Novo código
        #[arg(long)]
        new_code: Option<String>,

        #[arg(long)]
        photo: Option<String>,

        #[arg(long, value_name = "AAAA-MM-DD")]
        purchase_date: Option<String>,

        #[arg(long)]
        suit_price: Option<f64>,

        #[arg(long)]
        rental_price: Option<f64>,

        #[command(flatten)]
        rental: RentalArgs,

        /// Remover o vínculo de aluguel por completo
        #[arg(long, conflicts_with_all = ["customer", "phone", "email", "delivery", "return_date", "observations"])]
        clear_rental: bool,
    },

    /// Remove a suit permanently
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Código do terno
        code: String,
    },

    /// Mark a rented suit as returned
    #[command(display_order = 6)]
    Return {
        /// Código do terno
        code: String,
    },

    /// Mark a returned suit as pending again
    #[command(display_order = 7)]
    Unreturn {
        /// Código do terno
        code: String,
    },

    /// Export the catalog as CSV
    #[command(display_order = 8)]
    Export {
        /// Arquivo de saída (padrão: suit_catalog.csv)
        output: Option<PathBuf>,
    },

    /// Write a rental receipt for a suit
    #[command(display_order = 9)]
    Receipt {
        /// Código do terno
        code: String,

        /// Arquivo de saída
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load the sample catalog
    #[command(display_order = 10)]
    Seed {
        /// Substituir um catálogo existente
        #[arg(long)]
        force: bool,
    },

    /// Show or update the company profile used on receipts
    #[command(display_order = 11)]
    Company {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        complement: Option<String>,
        #[arg(long)]
        neighborhood: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// Estado com 2 letras (ex: SP)
        #[arg(long)]
        state: Option<String>,
        /// CEP; dígitos são formatados como XXXXX-XXX
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// CNPJ; dígitos são formatados como XX.XXX.XXX/XXXX-XX
        #[arg(long)]
        cnpj: Option<String>,
        #[arg(long)]
        logo: Option<String>,
        /// Exibir o CNPJ no recibo
        #[arg(long, value_name = "true|false")]
        show_cnpj: Option<bool>,
        /// Exibir o endereço no recibo
        #[arg(long, value_name = "true|false")]
        show_address: Option<bool>,
    },
}
