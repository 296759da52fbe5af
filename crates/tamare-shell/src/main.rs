use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use jiff::civil::Date;

use tamare_core::models::patient::Gender;
use tamare_core::models::report::ReportCategory;
use tamare_search::MedicationTab;
use tamare_shell::commands::{self, NewPatient};
use tamare_shell::config;
use tamare_shell::state::ShellState;

#[derive(Parser)]
#[command(name = "tamare", version, about = "Gestor de Salud Comunal TAMARE")]
struct Cli {
    /// Evaluation date (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, global = true)]
    today: Option<Date>,

    /// JSON records file. Overrides `records_path` from the config.
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dashboard counts and upcoming appointments
    Summary,
    /// List patients
    Patients {
        #[arg(default_value = "")]
        query: String,
    },
    /// List doctors
    Doctors {
        #[arg(default_value = "")]
        query: String,
    },
    /// List appointments
    Appointments {
        #[arg(default_value = "")]
        query: String,
        /// Day shown in the header
        #[arg(long)]
        date: Option<Date>,
    },
    /// List medications with stock and expiry flags
    Medications {
        #[arg(default_value = "")]
        query: String,
        #[arg(long, value_enum, default_value_t = TabArg::All)]
        tab: TabArg,
    },
    /// Report catalog and tables
    Reports {
        #[arg(long, value_enum, default_value_t = CategoryArg::Patients)]
        category: CategoryArg,
    },
    /// Register a patient through the patient form
    AddPatient {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long, value_enum, default_value_t = GenderArg::M)]
        gender: GenderArg,
        #[arg(long, default_value = "")]
        condition: String,
    },
    /// Write the default config file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    All,
    Critical,
    Expiring,
}

impl From<TabArg> for MedicationTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::All => MedicationTab::All,
            TabArg::Critical => MedicationTab::Critical,
            TabArg::Expiring => MedicationTab::Expiring,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Patients,
    Appointments,
    Medications,
}

impl From<CategoryArg> for ReportCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Patients => ReportCategory::Patients,
            CategoryArg::Appointments => ReportCategory::Appointments,
            CategoryArg::Medications => ReportCategory::Medications,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    M,
    F,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::M => Gender::M,
            GenderArg::F => Gender::F,
        }
    }
}

fn print(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::InitConfig = cli.command {
        let path = config::save_config(&config::TamareConfig::default())?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_config()?;
    if let Some(records) = cli.records {
        config.records_path = Some(records);
    }
    let today = cli.today.unwrap_or_else(|| jiff::Zoned::now().date());
    let mut state = ShellState::load(config, today)?;

    match cli.command {
        Command::Summary => print(commands::summary(&state)),
        Command::Patients { query } => print(commands::patients(&state, &query)),
        Command::Doctors { query } => print(commands::doctors(&state, &query)),
        Command::Appointments { query, date } => {
            print(commands::appointments(&state, &query, date))
        }
        Command::Medications { query, tab } => {
            print(commands::medications(&state, &query, tab.into()))
        }
        Command::Reports { category } => print(commands::reports(&state, category.into())),
        Command::AddPatient {
            name,
            age,
            gender,
            condition,
        } => {
            let patient = commands::add_patient(
                &mut state,
                NewPatient {
                    name,
                    age,
                    gender: gender.into(),
                    condition,
                },
            )?;
            println!("{}", patient.id);
        }
        Command::InitConfig => {}
    }

    Ok(())
}
