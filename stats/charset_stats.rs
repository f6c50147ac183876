//! Character class distribution report.
//!
//! Usage:
//!   ./charset_stats                 # 10,000 passwords, all classes, no coverage
//!   ./charset_stats -n 100000 -e    # with coverage enforcement
//!   ./charset_stats --seed 7        # reproducible run
//!
//! Prints per-class counts against the share each class has of the union
//! alphabet, plus a chi-square statistic (3 degrees of freedom).

use passforge::pass::{MIN_LENGTH, charset};
use passforge::{CharacterClass, ClassSet, GenerationRequest, RandomSource, entropy, generate};

struct Options {
    count: usize,
    length: usize,
    enforce: bool,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        count: 10_000,
        length: MIN_LENGTH,
        enforce: false,
        seed: None,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-e" | "--enforce" => opts.enforce = true,
            flag @ ("-n" | "-l" | "--seed") => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| format!("Missing value for {flag}"))?;
                let invalid = |_| format!("Invalid number: {value}");
                match flag {
                    "-n" => opts.count = value.parse().map_err(invalid)?,
                    "-l" => opts.length = value.parse().map_err(invalid)?,
                    _ => opts.seed = Some(value.parse().map_err(invalid)?),
                }
            }
            arg => return Err(format!("Unknown argument: {arg}")),
        }
        i += 1;
    }
    Ok(opts)
}

fn tally<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<[usize; 4], passforge::GenerateError> {
    let mut counts = [0usize; 4];
    for _ in 0..count {
        let pass = generate(request, rng)?;
        for c in pass.as_str().chars() {
            if let Some(class) = CharacterClass::of(c) {
                counts[class as usize] += 1;
            }
        }
    }
    Ok(counts)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: charset_stats [-n COUNT] [-l LENGTH] [-e] [--seed N]");
        std::process::exit(0);
    }

    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let classes = ClassSet::all();
    let request = GenerationRequest::new(opts.length, classes).enforce_coverage(opts.enforce);
    let counts = match opts.seed {
        Some(seed) => tally(&request, opts.count, &mut entropy::seeded(seed)),
        None => tally(&request, opts.count, &mut entropy::os()),
    };
    let counts = match counts {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let total: usize = counts.iter().sum();
    let union = charset::size(&classes) as f64;
    let mut chi_square = 0.0;

    println!(
        "{} passwords x {} chars, coverage {}, source {}",
        opts.count,
        opts.length,
        if opts.enforce { "on" } else { "off" },
        entropy::source_name(opts.seed)
    );
    println!("{:<10} {:>10} {:>12} {:>8}", "class", "observed", "expected", "share");
    for (class, observed) in CharacterClass::ALL.iter().zip(counts) {
        let expected = total as f64 * class.alphabet().len() as f64 / union;
        chi_square += (observed as f64 - expected).powi(2) / expected;
        println!(
            "{:<10} {:>10} {:>12.1} {:>7.2}%",
            format!("{class:?}"),
            observed,
            expected,
            observed as f64 * 100.0 / total as f64
        );
    }
    println!("chi-square (3 dof): {chi_square:.3}");
}
