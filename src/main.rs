use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payrun::application::engine::PayrollEngine;
use payrun::domain::ports::{EmployeeStore, EmployeeStoreBox, PaymentGatewayBox};
use payrun::infrastructure::bank::InMemoryBankGateway;
use payrun::infrastructure::in_memory::InMemoryEmployeeStore;
use payrun::interfaces::csv::employee_reader::EmployeeReader;
use payrun::interfaces::csv::payroll_writer::PayrollWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input employee roster CSV file
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store: EmployeeStoreBox = Box::new(InMemoryEmployeeStore::new());

    // Load the roster
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = EmployeeReader::new(file);
    for employee_result in reader.employees() {
        match employee_result {
            Ok(employee) => {
                if let Err(e) = store.save(employee).await {
                    eprintln!("Error saving employee: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading employee: {}", e);
            }
        }
    }

    // Run the payroll batch
    let gateway: PaymentGatewayBox = Box::new(InMemoryBankGateway::new());
    let engine = PayrollEngine::new(store, gateway);

    let paid = engine.pay_employees().await.into_diagnostic()?;
    let roster = engine.into_roster().await.into_diagnostic()?;
    eprintln!("Paid {} of {} employees", paid, roster.len());

    // Output final state
    let stdout = io::stdout();
    let mut writer = PayrollWriter::new(stdout.lock());
    writer.write_roster(roster).into_diagnostic()?;

    Ok(())
}
