//! Account commands.

use crate::cli::SignupArgs;
use crate::manager::create_manager;
use crate::output::OutputFormat;

/// Run the `signup` command
pub fn signup(args: &SignupArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.store);
    let confirm = args.confirm_password.as_deref().unwrap_or(&args.password);

    manager.sign_up(&args.user, &args.password, confirm, &args.email)?;

    match format {
        OutputFormat::Human => println!("Account '{}' created. Log in to add applications.", args.user),
        OutputFormat::Json => {
            let value = serde_json::json!({ "created": args.user });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
