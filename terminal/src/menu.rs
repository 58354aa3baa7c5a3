//! Numbered menu loop

use std::io::{self, BufRead, Write};

use retailx_api::app::{AssistantService, Query};
use retailx_api::render::render_response;

pub const MENU: &str = "\
Welcome to RetailX Assistant!
1. Find a Product
2. Check Product Availability
3. Track an Order
4. Get Personalized Promotions
5. Monitor Inventory
6. Exit
";

pub const GOODBYE: &str = "Exiting the RetailX Assistant. Goodbye!";

pub const INVALID_CHOICE: &str = "Invalid choice. Please select a number between 1 and 6.";

/// Run the menu until option 6 or end of input
pub fn run_menu<R: BufRead, W: Write>(
    assistant: &AssistantService,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        write!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Please choose an option (1-6): ")? else {
            return Ok(());
        };

        let query = match choice.as_str() {
            "1" => match prompt(input, out, "Enter the product name or keyword: ")? {
                Some(name) => Query::find_product(&name),
                None => return Ok(()),
            },
            "2" => match prompt(input, out, "Enter the product name: ")? {
                Some(name) => Query::check_availability(&name),
                None => return Ok(()),
            },
            "3" => match prompt(input, out, "Enter the order ID: ")? {
                Some(id) => Query::track_order(&id),
                None => return Ok(()),
            },
            "4" => match prompt(input, out, "Enter the customer ID: ")? {
                Some(id) => Query::promotions(&id),
                None => return Ok(()),
            },
            "5" => Query::low_stock(None),
            "6" => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(());
            }
            _ => {
                writeln!(out, "{}", INVALID_CHOICE)?;
                continue;
            }
        };

        let response = assistant.submit(query);
        writeln!(out, "{}", render_response(&response).trim_end())?;
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
