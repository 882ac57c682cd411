//! Form Command Implementation
//!
//! Interactive terminal form: prompts for each customer field, runs a
//! prediction per submission, and prints the probability with its
//! label. Categorical fields offer the choices the encoders were
//! fitted on; numeric fields enforce the same ranges the original form
//! widgets did.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use churn_core::CustomerRecord;
use churn_serving::{ArtifactBundle, ChurnPredictor};

/// Run the interactive prediction form
///
/// Each submission collects the customer fields, scores them, and
/// prints the result. A request-level failure (for example an unknown
/// category typed into a free-form choice) prints an error state and
/// the form continues.
///
/// # Example
///
/// ```bash
/// churn form --artifacts ./artifacts
/// ```
#[derive(Args, Debug, Clone)]
pub struct FormCommand {
    /// Directory containing the trained artifacts
    #[arg(long, short = 'a', env = "CHURN_ARTIFACTS_DIR")]
    pub artifacts: PathBuf,
}

impl FormCommand {
    /// Execute the form command
    pub fn run(&self) -> Result<()> {
        let bundle =
            ArtifactBundle::load(&self.artifacts).context("Failed to load artifact bundle")?;
        let predictor = ChurnPredictor::from_bundle(bundle);
        info!("Form ready, {} feature columns", predictor.input_dim());

        let stdin = io::stdin();
        let mut input = stdin.lock();

        println!("Customer Churn Prediction");
        println!("=========================");

        loop {
            let record = match read_record(&mut input, &predictor) {
                Some(record) => record,
                None => break, // EOF
            };

            match predictor.predict(&record) {
                Ok(result) => {
                    println!();
                    println!("  ----------------------------------------");
                    println!("  The customer is {}.", result.label.describe());
                    println!("  Probability: {:.2}", result.probability);
                    println!("  ----------------------------------------");
                }
                Err(e) => {
                    println!();
                    println!("  Prediction failed: {e}");
                }
            }

            println!();
            match prompt_line(&mut input, "Score another customer? [Y/n] ")? {
                Some(answer) if answer.eq_ignore_ascii_case("n") => break,
                Some(_) => continue,
                None => break,
            }
        }

        Ok(())
    }
}

/// Collects one record from the terminal. Returns `None` on EOF.
fn read_record(input: &mut impl BufRead, predictor: &ChurnPredictor) -> Option<CustomerRecord> {
    let assembler = predictor.assembler();
    let geographies = assembler.geography_encoder().categories();
    let genders = assembler.gender_encoder().classes();

    println!();
    let geography = prompt_choice(input, "Geography", geographies)?;
    let gender = prompt_choice(input, "Gender", genders)?;
    let age = prompt_i64(input, "Age", 40, 18..=92)?;
    let balance = prompt_f32(input, "Balance", 60_000.0)?;
    let credit_score = prompt_i64(input, "Credit score", 600, 300..=900)?;
    let estimated_salary = prompt_f32(input, "Estimated salary", 50_000.0)?;
    let tenure = prompt_i64(input, "Tenure (years with bank)", 3, 0..=10)?;
    let num_of_products = prompt_i64(input, "Number of products", 2, 1..=4)?;
    let has_cr_card = prompt_i64(input, "Has credit card (0/1)", 1, 0..=1)?;
    let is_active_member = prompt_i64(input, "Active member (0/1)", 1, 0..=1)?;

    Some(CustomerRecord {
        credit_score,
        gender,
        age,
        tenure,
        balance,
        num_of_products,
        has_cr_card,
        is_active_member,
        estimated_salary,
        geography,
    })
}

/// Reads one trimmed line after printing a prompt. Returns `None` on
/// EOF.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Numbered choice over a fixed option list; the first option is the
/// default. Re-prompts until a valid selection is entered.
fn prompt_choice(input: &mut impl BufRead, label: &str, options: &[String]) -> Option<String> {
    loop {
        println!("{label}:");
        for (i, option) in options.iter().enumerate() {
            println!("  [{}] {}", i + 1, option);
        }
        let answer = prompt_line(input, &format!("Select [1-{}] (default 1): ", options.len()))
            .ok()??;

        if answer.is_empty() {
            return Some(options[0].clone());
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Some(options[n - 1].clone()),
            _ => println!("  Please enter a number between 1 and {}.", options.len()),
        }
    }
}

/// Integer prompt with a default and an inclusive range, re-prompting
/// on parse failure or out-of-range input.
fn prompt_i64(
    input: &mut impl BufRead,
    label: &str,
    default: i64,
    range: RangeInclusive<i64>,
) -> Option<i64> {
    loop {
        let answer = prompt_line(
            input,
            &format!(
                "{label} [{}-{}] (default {default}): ",
                range.start(),
                range.end()
            ),
        )
        .ok()??;

        if answer.is_empty() {
            return Some(default);
        }
        match answer.parse::<i64>() {
            Ok(value) if range.contains(&value) => return Some(value),
            _ => println!(
                "  Please enter an integer between {} and {}.",
                range.start(),
                range.end()
            ),
        }
    }
}

/// Floating-point prompt with a default, re-prompting on parse failure.
fn prompt_f32(input: &mut impl BufRead, label: &str, default: f32) -> Option<f32> {
    loop {
        let answer = prompt_line(input, &format!("{label} (default {default}): ")).ok()??;

        if answer.is_empty() {
            return Some(default);
        }
        match answer.parse::<f32>() {
            Ok(value) if value.is_finite() => return Some(value),
            _ => println!("  Please enter a number."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_choice_defaults_to_first() {
        let options = vec!["France".to_string(), "Germany".to_string()];
        let mut input = Cursor::new("\n");
        let choice = prompt_choice(&mut input, "Geography", &options).unwrap();
        assert_eq!(choice, "France");
    }

    #[test]
    fn test_prompt_choice_by_number() {
        let options = vec!["France".to_string(), "Germany".to_string()];
        let mut input = Cursor::new("2\n");
        let choice = prompt_choice(&mut input, "Geography", &options).unwrap();
        assert_eq!(choice, "Germany");
    }

    #[test]
    fn test_prompt_choice_reprompts_on_invalid() {
        let options = vec!["France".to_string(), "Germany".to_string()];
        let mut input = Cursor::new("9\nabc\n1\n");
        let choice = prompt_choice(&mut input, "Geography", &options).unwrap();
        assert_eq!(choice, "France");
    }

    #[test]
    fn test_prompt_i64_enforces_range() {
        let mut input = Cursor::new("150\n40\n");
        let value = prompt_i64(&mut input, "Age", 40, 18..=92).unwrap();
        assert_eq!(value, 40);
    }

    #[test]
    fn test_prompt_i64_default_on_empty() {
        let mut input = Cursor::new("\n");
        let value = prompt_i64(&mut input, "Tenure", 3, 0..=10).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_prompt_f32_parses_value() {
        let mut input = Cursor::new("1234.5\n");
        let value = prompt_f32(&mut input, "Balance", 60_000.0).unwrap();
        assert!((value - 1234.5).abs() < 1e-3);
    }

    #[test]
    fn test_prompt_returns_none_on_eof() {
        let mut input = Cursor::new("");
        assert!(prompt_i64(&mut input, "Age", 40, 18..=92).is_none());
    }
}
