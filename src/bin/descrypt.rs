use descrypt::error::Error;
use descrypt::unix_crypt;

use clap::{Args, Parser, Subcommand};
use rand::rngs::OsRng;
use rand::Rng;
use std::io;
use std::process;

const SALT_CHARS: &[u8] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Parser)]
#[command(author, version, about)]
#[command(infer_subcommands = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hash a password
    Generate(GenerateArgs),
    /// Check a password against a stored hash
    Validate(ValidateArgs),
}

#[derive(Clone, Debug, Args)]
struct GenerateArgs {
    #[arg(long, short)]
    password: Option<String>,
    /// Two-character salt; randomly generated when absent
    #[arg(long, short)]
    salt: Option<String>,
}

#[derive(Clone, Debug, Args)]
struct ValidateArgs {
    #[arg(long, short)]
    password: Option<String>,
    /// Stored hash, bare or with a {CRYPT} prefix
    hash: String,
}

fn gen_salt_str() -> String {
    let mut rng = OsRng;
    (0..unix_crypt::SALT_LEN)
	.map(|_| SALT_CHARS[rng.gen_range(0..SALT_CHARS.len())] as char)
	.collect()
}

fn generate(GenerateArgs { password, salt }: GenerateArgs) -> io::Result<()> {
    let pw = prompt_new_password(password)?;
    let salt = salt.unwrap_or_else(gen_salt_str);
    match unix_crypt::hash_with(&salt, pw) {
	Ok(hash) => println!("{}", hash),
	Err(e) => {
	    eprintln!("Error: {}", e);
	    process::exit(1);
	}
    }
    Ok(())
}

fn validate(ValidateArgs { password, hash }: ValidateArgs) -> io::Result<()> {
    let pw = match password {
	Some(pw) => pw,
	None => rpassword::prompt_password("Enter password: ")?,
    };
    match unix_crypt::verify(pw, &hash) {
	Ok(()) => println!("valid"),
	Err(Error::Mismatch) => println!("not valid"),
	Err(e) => {
	    eprintln!("Error: {}", e);
	    process::exit(1);
	}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cmd = cli.command.unwrap_or(Commands::Generate(cli.generate));
    match cmd {
	Commands::Generate(args) => generate(args)?,
	Commands::Validate(args) => validate(args)?,
    };
    Ok(())
}

fn prompt_new_password(password: Option<String>) -> io::Result<String> {
    match password {
	Some(pw) => Ok(pw),
	None => loop {
	    let pw = rpassword::prompt_password("Enter new password: ")?;
	    let confirmed = rpassword::prompt_password("Retype new password: ")?;
	    if pw == confirmed {
		return Ok(pw);
	    }
	    println!("Error: Passwords don't match!")
	},
    }
}
