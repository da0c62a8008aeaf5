// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error, Fail, ResultExt};
use log::info;
use std::str::FromStr;

use mandelbrot::config::{parse_complex, parse_pair};
use mandelbrot::{write_png, Config, OutputError};

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((0, _)) | Some((_, 0)) => Err("Image dimensions must be non-zero".to_string()),
        Some(_) => Ok(()),
        None => Err("Could not parse output image size".to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

const MAX_THREADS: usize = 4096;

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Parallel escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.png")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("3840x2160")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,-2")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2,2")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of threads to use in solver [default: number of CPUs]"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum iterations per point"),
        )
        .get_matches()
}

// Validators have already run, so the parses below only fail if clap
// and the validators disagree.
fn config(matches: &ArgMatches) -> Result<Config, Error> {
    let mut config = Config::default();
    let size = matches.value_of(SIZE).unwrap_or_default();
    let (width, height) =
        parse_pair::<usize>(size, 'x').ok_or_else(|| format_err!("bad image size {}", size))?;
    config.width = width;
    config.height = height;

    let leftlower = matches.value_of(LEFTLOWER).unwrap_or_default();
    config.leftlower = parse_complex(leftlower)
        .ok_or_else(|| format_err!("bad left lower corner {}", leftlower))?;
    let rightupper = matches.value_of(RIGHTUPPER).unwrap_or_default();
    config.rightupper = parse_complex(rightupper)
        .ok_or_else(|| format_err!("bad right upper corner {}", rightupper))?;

    if let Some(threads) = matches.value_of(THREADS) {
        config.threads = usize::from_str(threads).context("Could not parse thread count")?;
    }
    if let Some(iterations) = matches.value_of(ITERATIONS) {
        config.iterations =
            usize::from_str(iterations).context("Could not parse iteration count")?;
    }
    if let Some(output) = matches.value_of(OUTPUT) {
        config.output = output.to_string();
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config(matches).context("Error reading arguments")?;
    let renderer = config
        .renderer()
        .context("Error configuring the renderer")?;
    let buffer = renderer.render().context("Error rendering")?;
    write_png(&config.output, &buffer).map_err(|e| {
        let phase = match e {
            OutputError::Create { .. } => "Error creating file",
            OutputError::Encode { .. } | OutputError::TooLarge { .. } => {
                "Error encoding image"
            }
        };
        e.context(phase).into()
    })
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        match e.as_fail().cause() {
            Some(cause) => eprintln!("{}: {}", e, cause),
            None => eprintln!("{}", e),
        }
        std::process::exit(1);
    }
    info!("done");
}
