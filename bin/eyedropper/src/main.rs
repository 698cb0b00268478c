//! Sample a single pixel from an image file and print its color code in
//! every notation.

use std::{env, process};

use colorcode::{Rgb, Swatch};
use image::GenericImageView;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut json_output = false;
    let mut positional = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            other if !other.starts_with("--") => positional.push(other),
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
    }

    let (path, x, y) = match positional.as_slice() {
        [path, x, y] => match (x.parse::<u32>(), y.parse::<u32>()) {
            (Ok(x), Ok(y)) => (*path, x, y),
            _ => {
                eprintln!("Coordinates must be non-negative integers");
                process::exit(1);
            }
        },
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let img = match image::open(path) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {path}: {err}");
            process::exit(1);
        }
    };

    let (width, height) = img.dimensions();
    if x >= width || y >= height {
        eprintln!("Pixel ({x}, {y}) is outside the {width}x{height} image");
        process::exit(1);
    }

    let pixel = img.get_pixel(x, y);
    let swatch = Swatch::from(Rgb::new(pixel[0], pixel[1], pixel[2]));

    if json_output {
        match serde_json::to_string_pretty(&swatch) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize swatch: {err}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", swatch.hex);
        println!("{}", swatch.rgb);
        println!("{}", swatch.hsl);
    }
}

fn print_help(program: &str) {
    eprintln!("Usage: {program} [--json] <image> <x> <y>");
    eprintln!();
    eprintln!("Sample the pixel at (x, y) and print it as hex, rgb() and hsl().");
}
