//! Info command - shows data directory, mode and store counts.

use tracker::{
    OwnerMode,
    record::{Owner, RecordStore},
};

use crate::cli::InfoArgs;
use crate::manager::create_manager;
use crate::output::OutputFormat;

/// Run the info command
pub fn run(args: &InfoArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.store);
    let config = manager.config();

    let usernames = manager.accounts().usernames()?;
    let records = match config.owner_mode {
        OwnerMode::Single => RecordStore::open(config.data_dir(), Owner::Global)?.len(),
        OwnerMode::Multi => {
            let mut total = 0;
            for username in &usernames {
                total += RecordStore::open(config.data_dir(), Owner::User(username.clone()))?.len();
            }
            total
        }
    };

    let data_dir = config.data_dir().display().to_string();
    match format {
        OutputFormat::Human => {
            println!("Data dir:    {data_dir}");
            println!("Mode:        {}", config.owner_mode);
            println!("Passwords:   {}", config.password_scheme);
            println!("Accounts:    {}", usernames.len());
            println!("Records:     {records}");
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "data_dir": data_dir,
                "mode": config.owner_mode.as_str(),
                "password_scheme": config.password_scheme.as_str(),
                "accounts": usernames.len(),
                "records": records,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
