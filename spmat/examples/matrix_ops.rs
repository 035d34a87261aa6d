//! Demonstration driver: load two matrices and run the three operations
//!
//! Loads both input files, prints them, then prints the results of
//! addition, subtraction, and multiplication in sequence. A failing
//! operation is reported inline and the remaining operations still run.

use std::path::PathBuf;

use clap::Parser;
use spmat::{loader, printer, Error, SparseMatrix};

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Load two sparse matrix text files and print the add, subtract, and multiply results")]
struct Cli {
    /// Path to the first matrix description
    #[arg(default_value = "spmat/examples/data/matrix1.txt")]
    matrix_a: PathBuf,

    /// Path to the second matrix description
    #[arg(default_value = "spmat/examples/data/matrix2.txt")]
    matrix_b: PathBuf,
}

fn load_and_print(label: &str, path: &PathBuf) -> Result<SparseMatrix, Error> {
    println!("Loading {}...", path.display());
    let matrix = loader::load_matrix(path)?;
    println!("{label}:");
    printer::print_matrix(&matrix)?;
    Ok(matrix)
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let a = load_and_print("Matrix 1", &cli.matrix_a)?;
    println!();
    let b = load_and_print("Matrix 2", &cli.matrix_b)?;

    println!("\nPerforming Addition:");
    match a.add(&b) {
        Ok(sum) => {
            println!("Result of Addition:");
            printer::print_matrix(&sum)?;
        }
        Err(err) => println!("Error during addition: {err}"),
    }

    println!("\nPerforming Subtraction:");
    match a.subtract(&b) {
        Ok(diff) => {
            println!("Result of Subtraction:");
            printer::print_matrix(&diff)?;
        }
        Err(err) => println!("Error during subtraction: {err}"),
    }

    println!("\nPerforming Multiplication:");
    match a.multiply(&b) {
        Ok(product) => {
            println!("Result of Multiplication:");
            printer::print_matrix(&product)?;
        }
        Err(err) => println!("Error during multiplication: {err}"),
    }

    Ok(())
}
