use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use blur_kernel::{Kernel, KernelFloat, KernelInt};
use clap::Parser;
use log::debug;
use num_traits::Zero;

mod structs;

#[derive(Parser)]
#[clap(author = "blur_kernel developers")]
#[clap(version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    shape: structs::Shape,

    /// Comma-separated values of cells in row-major order [default: all zeros]
    #[clap(
        long,
        global = true,
        value_delimiter = ',',
        allow_hyphen_values = true,
        value_parser
    )]
    values: Vec<String>,

    /// Type of kernel cells
    #[clap(short, long, global = true, value_enum, default_value_t = structs::Kind::Float)]
    kind: structs::Kind,

    /// Convert the kernel into the other type of cells
    /// (float values are truncated toward zero)
    #[clap(short, long, global = true, action)]
    convert: bool,

    /// Output format
    #[clap(short, long, global = true, value_enum, default_value_t = structs::Format::Text)]
    format: structs::Format,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, PartialEq)]
enum AnyKernel {
    Int(KernelInt),
    Float(KernelFloat),
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    let kernel = build(&cli)?;
    println!("{}", render(&kernel, cli.format)?);
    Ok(())
}

fn build(cli: &Cli) -> Result<AnyKernel> {
    let kernel = match cli.kind {
        structs::Kind::Int => AnyKernel::Int(create_kernel(cli)?),
        structs::Kind::Float => AnyKernel::Float(create_kernel(cli)?),
    };
    if !cli.convert {
        return Ok(kernel);
    }

    debug!(
        "Convert the kernel from {:?} into {:?} cells",
        cli.kind,
        cli.kind.converted()
    );
    let converted = match kernel {
        AnyKernel::Int(k) => AnyKernel::Float(k.to_float()),
        AnyKernel::Float(k) => {
            let truncated = k.to_int_truncated();
            let lossy = k
                .as_slice()
                .iter()
                .zip(truncated.as_slice())
                .filter(|&(&f, &i)| f != i as f32)
                .count();
            if lossy > 0 {
                debug!("{} cell(s) lost their fractional part", lossy);
            }
            AnyKernel::Int(truncated)
        }
    };
    Ok(converted)
}

fn create_kernel<T>(cli: &Cli) -> Result<Kernel<T>>
where
    T: Zero + Clone + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut kernel = match cli.shape {
        structs::Shape::Square { size } => Kernel::new_square(size),
        structs::Shape::Rect {
            width,
            height,
            center_x,
            center_y,
        } => Kernel::new(width, height, center_x, center_y),
    }
    .with_context(|| format!("Failed to create kernel {:?}", cli.shape))?;
    debug!(
        "Created {}x{} kernel with center {:?}",
        kernel.width(),
        kernel.height(),
        kernel.center()
    );

    if cli.values.is_empty() {
        return Ok(kernel);
    }
    if cli.values.len() != kernel.cells_count() {
        return Err(anyhow!(
            "Kernel {}x{} requires {} values, got {}",
            kernel.width(),
            kernel.height(),
            kernel.cells_count(),
            cli.values.len()
        ));
    }
    for (cell, value) in kernel.as_mut_slice().iter_mut().zip(&cli.values) {
        *cell = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {:?} value of cell: {:?}", cli.kind, value))?;
    }
    Ok(kernel)
}

fn render(kernel: &AnyKernel, format: structs::Format) -> Result<String> {
    let output = match (kernel, format) {
        (AnyKernel::Int(k), structs::Format::Text) => k.to_string(),
        (AnyKernel::Float(k), structs::Format::Text) => k.to_string(),
        (AnyKernel::Int(k), structs::Format::Json) => serde_json::to_string_pretty(k)?,
        (AnyKernel::Float(k), structs::Format::Json) => serde_json::to_string_pretty(k)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<AnyKernel> {
        let args = std::iter::once("kernel-tool").chain(args.iter().copied());
        let cli = Cli::try_parse_from(args)?;
        build(&cli)
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn zero_filled_square() {
        let kernel = run(&["square", "3"]).unwrap();
        assert_eq!(kernel, AnyKernel::Float(KernelFloat::new_square(3).unwrap()));
    }

    #[test]
    fn widen_int_values() {
        let kernel = run(&[
            "square",
            "3",
            "--kind",
            "int",
            "--values",
            "1,2,1,2,4,2,1,2,1",
            "--convert",
        ])
        .unwrap();
        let AnyKernel::Float(k) = kernel else {
            panic!("expected float kernel");
        };
        assert_eq!(k[(1, 1)], 4.0);
        let text = render(&AnyKernel::Float(k), structs::Format::Text).unwrap();
        assert_eq!(text, "1 2 1\n2 4 2\n1 2 1");
    }

    #[test]
    fn narrow_float_values() {
        let kernel = run(&[
            "rect",
            "3",
            "1",
            "2",
            "0",
            "--values",
            "-2.7,0.5,2.7",
            "-c",
        ])
        .unwrap();
        let expected = KernelInt::from_vec(3, 1, 2, 0, vec![-2, 0, 2]).unwrap();
        assert_eq!(kernel, AnyKernel::Int(expected));
        let json = render(&kernel, structs::Format::Json).unwrap();
        assert!(json.contains("\"center_x\": 2"), "{}", json);
    }

    #[test]
    fn invalid_arguments() {
        assert!(run(&["square", "4"]).is_err());
        assert!(run(&["rect", "3", "3", "3", "0"]).is_err());
        assert!(run(&["square", "1", "--values", "1,2"]).is_err());
        assert!(run(&["square", "1", "--kind", "int", "--values", "1.5"]).is_err());
    }
}
