//! A utility for creating the application database and its first user.
//!
//! Running it against an existing database is safe: the user's password is
//! left untouched if the username is already taken.

use std::{io, process::exit};

use clap::Parser;
use rusqlite::Connection;

use offertory::{PasswordHash, SeedOutcome, ValidatedPassword, initialize_db, upsert_user};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database. Created if it does not exist.
    #[arg(long)]
    db_path: String,

    /// The username to log in with.
    #[arg(long, default_value = "admin")]
    username: String,
}

fn main() {
    let args = Args::parse();

    let connection = match Connection::open(&args.db_path) {
        Ok(connection) => connection,
        Err(error) => {
            print_error(format!(
                "Could not open the database at {}: {error}",
                args.db_path
            ));
            exit(1);
        }
    };

    if let Err(error) = initialize_db(&connection) {
        print_error(format!("Could not initialise the database: {error}"));
        exit(1);
    }

    let password_hash = match get_password_hash() {
        Some(password_hash) => password_hash,
        None => return,
    };

    match upsert_user(&args.username, password_hash, &connection) {
        Ok(SeedOutcome::Created(user)) => {
            println!("Created user {:?}. You can now log in.", user.username);
        }
        Ok(SeedOutcome::AlreadyExists(user)) => {
            println!(
                "The user {:?} already exists, leaving its password unchanged.",
                user.username
            );
        }
        Err(error) => {
            print_error(format!("Could not create user: {error}"));
            exit(1);
        }
    }
}

fn get_password_hash() -> Option<PasswordHash> {
    loop {
        println!();

        let first_password = match rpassword::prompt_password("Enter a password: ") {
            Ok(string) => string,
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                return None;
            }
            Err(error) => {
                print_error(format!("Could not read password from stdin: {error}"));
                return None;
            }
        };

        if let Err(error) = ValidatedPassword::new(&first_password) {
            print_error(error);
            continue;
        }

        let second_password = match rpassword::prompt_password("Enter the same password again: ") {
            Ok(string) => string,
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                return None;
            }
            Err(error) => {
                print_error(format!("Could not read password from stdin: {error}"));
                return None;
            }
        };

        if first_password != second_password {
            print_error("Passwords must match, try again.");
            continue;
        }

        let password_hash = match PasswordHash::from_raw_password(&first_password) {
            Ok(password_hash) => password_hash,
            Err(error) => {
                print_error(format!("Could not hash password: {error}. Try again."));
                continue;
            }
        };

        return Some(password_hash);
    }
}

fn print_error(error: impl ToString) {
    eprintln!("\x1b[31;1m{}\x1b[0m", error.to_string())
}
