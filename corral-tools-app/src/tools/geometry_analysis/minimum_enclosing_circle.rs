/*
This tool is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 18/06/2023
Last Modified: 03/02/2024
License: MIT
*/

use crate::tools::*;
use corral_common::algorithms::smallest_enclosing_circle_with_rng;
use corral_common::utils::{get_formatted_elapsed_time, read_points_file};
use rand::prelude::*;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufWriter, Error, ErrorKind};
use std::path;
use std::time::Instant;

/// This tool computes the smallest circle that encloses every point in the input points
/// file (`--input`), using a randomized incremental construction (Welzl, 1991) that runs
/// in expected linear time. The circle is written to the output file (`--output`) as a
/// single line holding the centre x, centre y, and radius, separated by spaces.
///
/// Containment testing uses a mixed tolerance (`--tolerance`): a point is accepted when
/// its overshoot beyond the circle, measured on squared distances, is within the tolerance
/// either relative to the squared radius or as an absolute bound. The relative branch
/// keeps the test meaningful for circles with very large radii, and the absolute branch
/// covers circles with radii near zero. The default of 1e-8 suits coordinates up to the
/// order of one billion.
///
/// The construction visits points in a shuffled order. Supplying `--seed` fixes that
/// order, making repeated runs identical; when it is left unset the shuffle is seeded
/// from the operating system. The circle itself is the same for any seed, up to
/// floating-point rounding.
///
/// An empty input yields a degenerate circle at the origin with a radius of zero.
/// Inputs holding non-finite coordinates are rejected.
///
/// # See Also
/// `ConvexHull`, `ValidateEnclosingCircle`, `RandomPoints`
pub struct MinimumEnclosingCircle {
    name: String,
    description: String,
    toolbox: String,
    parameters: Vec<ToolParameter>,
    example_usage: String,
}

impl MinimumEnclosingCircle {
    pub fn new() -> MinimumEnclosingCircle {
        // public constructor
        let name = "MinimumEnclosingCircle".to_string();
        let toolbox = "Geometry Analysis".to_string();
        let description =
            "Computes the smallest circle enclosing a set of points.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Points File".to_owned(),
            flags: vec!["-i".to_owned(), "--input".to_owned()],
            description: "Input points file.".to_owned(),
            parameter_type: ParameterType::ExistingFile(ParameterFileType::Text),
            default_value: None,
            optional: false,
        });

        parameters.push(ToolParameter {
            name: "Output File".to_owned(),
            flags: vec!["-o".to_owned(), "--output".to_owned()],
            description: "Output file holding the circle centre and radius.".to_owned(),
            parameter_type: ParameterType::NewFile(ParameterFileType::Text),
            default_value: None,
            optional: false,
        });

        parameters.push(ToolParameter {
            name: "Containment Tolerance".to_owned(),
            flags: vec!["--tolerance".to_owned()],
            description: "Relative and absolute tolerance used when testing containment."
                .to_owned(),
            parameter_type: ParameterType::Float,
            default_value: Some("1e-8".to_owned()),
            optional: true,
        });

        parameters.push(ToolParameter {
            name: "Random Seed".to_owned(),
            flags: vec!["--seed".to_owned()],
            description: "Seed for the shuffle of the point order; leave unset for a random seed."
                .to_owned(),
            parameter_type: ParameterType::Integer,
            default_value: None,
            optional: true,
        });

        let sep: String = path::MAIN_SEPARATOR.to_string();
        let e = format!("{}", env::current_exe().unwrap().display());
        let mut parent = env::current_exe().unwrap();
        parent.pop();
        let p = format!("{}", parent.display());
        let mut short_exe = e
            .replace(&p, "")
            .replace(".exe", "")
            .replace(".", "")
            .replace(&sep, "");
        if e.contains(".exe") {
            short_exe += ".exe";
        }
        let usage = format!(
            ">>.*{0} -r={1} -v --wd=\"*path*to*data*\" -i=points.txt -o=circle.txt --seed=25",
            short_exe, name
        )
        .replace("*", &sep);

        MinimumEnclosingCircle {
            name: name,
            description: description,
            toolbox: toolbox,
            parameters: parameters,
            example_usage: usage,
        }
    }
}

impl CorralTool for MinimumEnclosingCircle {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        self.name.clone()
    }

    fn get_tool_description(&self) -> String {
        self.description.clone()
    }

    fn get_tool_parameters(&self) -> String {
        match serde_json::to_string(&self.parameters) {
            Ok(json_str) => return format!("{{\"parameters\":{}}}", json_str),
            Err(err) => return format!("{:?}", err),
        }
    }

    fn get_example_usage(&self) -> String {
        self.example_usage.clone()
    }

    fn get_toolbox(&self) -> String {
        self.toolbox.clone()
    }

    fn run<'a>(
        &self,
        args: Vec<String>,
        working_directory: &'a str,
        verbose: bool,
    ) -> Result<(), Error> {
        let mut input_file = String::new();
        let mut output_file = String::new();
        let mut tolerance = 1e-8f64;
        let mut rng_seed = -1isize;

        if args.len() == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Tool run with no parameters.",
            ));
        }
        for i in 0..args.len() {
            let mut arg = args[i].replace("\"", "");
            arg = arg.replace("\'", "");
            let cmd = arg.split("="); // in case an equals sign was used
            let vec = cmd.collect::<Vec<&str>>();
            let mut keyval = false;
            if vec.len() > 1 {
                keyval = true;
            }
            let flag_val = vec[0].to_lowercase().replace("--", "-");
            if flag_val == "-i" || flag_val == "-input" {
                input_file = if keyval {
                    vec[1].to_string()
                } else {
                    args[i + 1].to_string()
                };
            } else if flag_val == "-o" || flag_val == "-output" {
                output_file = if keyval {
                    vec[1].to_string()
                } else {
                    args[i + 1].to_string()
                };
            } else if flag_val == "-tolerance" {
                tolerance = if keyval {
                    vec[1]
                        .to_string()
                        .parse::<f64>()
                        .expect(&format!("Error parsing {}", flag_val))
                } else {
                    args[i + 1]
                        .to_string()
                        .parse::<f64>()
                        .expect(&format!("Error parsing {}", flag_val))
                };
            } else if flag_val == "-seed" {
                rng_seed = if keyval {
                    vec[1]
                        .to_string()
                        .parse::<isize>()
                        .expect(&format!("Error parsing {}", flag_val))
                } else {
                    args[i + 1]
                        .to_string()
                        .parse::<isize>()
                        .expect(&format!("Error parsing {}", flag_val))
                };
            }
        }

        if verbose {
            let tool_name = self.get_tool_name();
            let welcome_len = format!("* Welcome to {} *", tool_name).len().max(21);
            // 21 = length of the 'Powered by' statement.
            println!("{}", "*".repeat(welcome_len));
            println!(
                "* Welcome to {} {}*",
                tool_name,
                " ".repeat(welcome_len - 15 - tool_name.len())
            );
            println!("* Powered by Corral {}*", " ".repeat(welcome_len - 21));
            println!("* www.corralgeo.org {}*", " ".repeat(welcome_len - 21));
            println!("{}", "*".repeat(welcome_len));
        }

        let sep: String = path::MAIN_SEPARATOR.to_string();
        if !input_file.contains(&sep) && !input_file.contains("/") {
            input_file = format!("{}{}", working_directory, input_file);
        }
        if !output_file.contains(&sep) && !output_file.contains("/") {
            output_file = format!("{}{}", working_directory, output_file);
        }

        let start = Instant::now();

        if verbose {
            println!("Reading data...")
        };
        let points = read_points_file(&input_file)?;
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "Input points must have finite coordinates.",
            ));
        }
        if verbose {
            println!("Read {} points.", points.len());
            if points.is_empty() {
                println!("Warning: The input file contains no points; a degenerate circle will be written.");
            }
        }

        let seed_value: u64 = if rng_seed < 0 {
            thread_rng().gen()
        } else {
            rng_seed as u64
        };
        let mut rng = StdRng::seed_from_u64(seed_value);

        let circle = smallest_enclosing_circle_with_rng(&points, tolerance, &mut rng);
        if !circle.radius.is_finite()
            || !circle.center.x.is_finite()
            || !circle.center.y.is_finite()
        {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "The enclosing circle is undefined for this input.",
            ));
        }
        if verbose {
            println!(
                "Minimum enclosing circle: center = {}, radius = {}",
                circle.center, circle.radius
            );
        }

        if verbose {
            println!("Saving data...")
        };
        let f = File::create(&output_file)?;
        let mut writer = BufWriter::new(f);
        writer.write_all(
            format!("{} {} {}\n", circle.center.x, circle.center.y, circle.radius).as_bytes(),
        )?;
        if verbose {
            println!("Output file written")
        }

        let elapsed_time = get_formatted_elapsed_time(start);

        if verbose {
            println!("{}", &format!("Elapsed Time: {}", elapsed_time));
        }

        Ok(())
    }
}
