use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::{
    common::{command::Command, money::Money},
    domain::account::AccountNumber,
};

const MENU: &str = "\n--- Bank Management System ---\n\
1. Create Account\n\
2. Deposit\n\
3. Withdraw\n\
4. Check Balance\n\
5. Transaction History\n\
6. Display All Accounts\n\
7. Exit\n";

/// Shows the menu and reads one complete command, one prompt per field.
///
/// Malformed fields are re-prompted rather than rejected, so the ledger only
/// ever sees well-typed values. Returns `Ok(None)` once `input` is exhausted.
///
/// # Examples
///
/// ```
/// use account_ledger::io::prompt::read_command;
/// use account_ledger::common::command::Command;
///
/// let mut input = "4\n100\n".as_bytes();
/// let mut out = Vec::new();
/// let cmd = read_command(&mut input, &mut out).unwrap();
///
/// assert_eq!(cmd, Some(Command::Balance { number: 100 }));
/// ```
pub fn read_command<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Command>> {
    loop {
        out.write_all(MENU.as_bytes())?;
        let Some(choice) = read_field(input, out, "Enter choice: ")? else {
            return Ok(None);
        };

        let command = match choice.as_str() {
            "1" => create_account(input, out)?,
            "2" => amount_command(input, out, "Enter Amount to Deposit: ")?
                .map(|(number, amount)| Command::Deposit { number, amount }),
            "3" => amount_command(input, out, "Enter Amount to Withdraw: ")?
                .map(|(number, amount)| Command::Withdraw { number, amount }),
            "4" => read_account_number(input, out)?.map(|number| Command::Balance { number }),
            "5" => read_account_number(input, out)?.map(|number| Command::History { number }),
            "6" => Some(Command::ListAll),
            "7" => Some(Command::Exit),
            _ => {
                writeln!(out, "Invalid choice. Try again.")?;
                continue;
            }
        };
        return Ok(command);
    }
}

fn create_account<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Command>> {
    let Some(number) = read_account_number(input, out)? else {
        return Ok(None);
    };
    let holder = loop {
        let Some(name) = read_field(input, out, "Enter Account Holder Name: ")? else {
            return Ok(None);
        };
        if !name.is_empty() {
            break name;
        }
        writeln!(out, "Name cannot be empty.")?;
    };
    let Some(initial_deposit) = read_parsed::<Money, _, _>(input, out, "Enter Initial Deposit: ")?
    else {
        return Ok(None);
    };
    Ok(Some(Command::CreateAccount {
        number,
        holder,
        initial_deposit,
    }))
}

fn amount_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    amount_prompt: &str,
) -> io::Result<Option<(AccountNumber, Money)>> {
    let Some(number) = read_account_number(input, out)? else {
        return Ok(None);
    };
    Ok(read_parsed::<Money, _, _>(input, out, amount_prompt)?.map(|amount| (number, amount)))
}

fn read_account_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<AccountNumber>> {
    read_parsed(input, out, "Enter Account Number: ")
}

/// Re-prompts until the field parses or input runs out.
fn read_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<T>> {
    loop {
        let Some(text) = read_field(input, out, prompt)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Invalid input '{text}'. Try again.")?,
        }
    }
}

fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    loop {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        match std::str::from_utf8(&line) {
            Ok(text) => return Ok(Some(text.trim().to_string())),
            Err(_) => writeln!(out, "Input is not valid UTF-8. Try again.")?,
        }
    }
}
