use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use flowerdesk_core::password::validate_password_strength;
use flowerdesk_tools::hash::{HashReport, MIN_PASSWORD_LENGTH};

/// Generate a bcrypt hash for a funeral home password.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Plaintext password to hash.
    password: Option<String>,

    /// Login id used in the suggested SQL statement.
    #[arg(long)]
    login_id: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let Some(password) = args.password else {
        eprintln!("{}", Args::command().render_usage());
        eprintln!("Example: generate-hash 'new-password' --login-id hanbit");
        return Ok(ExitCode::FAILURE);
    };

    if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
        eprintln!("Warning: {msg}");
    }

    let report = HashReport::generate(&password, args.login_id.as_deref())?;
    print!("{}", report.render());
    Ok(ExitCode::SUCCESS)
}
