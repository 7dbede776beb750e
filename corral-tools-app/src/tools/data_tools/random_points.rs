/*
This tool is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 21/06/2023
Last Modified: 11/01/2024
License: MIT
*/

use crate::tools::*;
use corral_common::structures::Point2D;
use corral_common::utils::{get_formatted_elapsed_time, write_points_file};
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::f64;
use std::io::{Error, ErrorKind};
use std::path;
use std::time::Instant;

/// This tool generates a random set of planar points and saves them to an output points
/// file (`--output`), providing test data for the other tools in the library. The number
/// of points is set with `--num_points` and their arrangement with `--pattern`, which must
/// be one of 'gaussian' (a normally distributed cluster), 'uniform' (uniform over a square),
/// 'ring' (points scattered about a common circle, a demanding input for enclosing-circle
/// solvers because nearly every point lies on the convex hull), or 'huge' (uniform with
/// coordinates on the order of one billion). A number of far-flung outlier points can be
/// appended to the set with `--outliers`. Supplying `--seed` makes the output reproducible;
/// when it is left unset the generator is seeded from the operating system.
///
/// # See Also
/// `MinimumEnclosingCircle`, `ValidateEnclosingCircle`
pub struct RandomPoints {
    name: String,
    description: String,
    toolbox: String,
    parameters: Vec<ToolParameter>,
    example_usage: String,
}

impl RandomPoints {
    pub fn new() -> RandomPoints {
        // public constructor
        let name = "RandomPoints".to_string();
        let toolbox = "Data Tools".to_string();
        let description =
            "Generates a random set of points in one of several arrangements.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Output Points File".to_owned(),
            flags: vec!["-o".to_owned(), "--output".to_owned()],
            description: "Output points file.".to_owned(),
            parameter_type: ParameterType::NewFile(ParameterFileType::Text),
            default_value: None,
            optional: false,
        });

        parameters.push(ToolParameter {
            name: "Number of Points".to_owned(),
            flags: vec!["--num_points".to_owned()],
            description: "Number of points to generate.".to_owned(),
            parameter_type: ParameterType::Integer,
            default_value: Some("100".to_owned()),
            optional: true,
        });

        parameters.push(ToolParameter {
            name: "Point Pattern".to_owned(),
            flags: vec!["--pattern".to_owned()],
            description: "Arrangement of the generated points.".to_owned(),
            parameter_type: ParameterType::OptionList(vec![
                "gaussian".to_owned(),
                "uniform".to_owned(),
                "ring".to_owned(),
                "huge".to_owned(),
            ]),
            default_value: Some("gaussian".to_owned()),
            optional: true,
        });

        parameters.push(ToolParameter {
            name: "Number of Outliers".to_owned(),
            flags: vec!["--outliers".to_owned()],
            description: "Number of far-flung outlier points appended to the set.".to_owned(),
            parameter_type: ParameterType::Integer,
            default_value: Some("0".to_owned()),
            optional: true,
        });

        parameters.push(ToolParameter {
            name: "Random Seed".to_owned(),
            flags: vec!["--seed".to_owned()],
            description: "Seed for the random number generator; leave unset for a random seed."
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
            ">>.*{0} -r={1} -v --wd=\"*path*to*data*\" -o=points.txt --num_points=500 --pattern=gaussian --outliers=4 --seed=25",
            short_exe, name
        )
        .replace("*", &sep);

        RandomPoints {
            name: name,
            description: description,
            toolbox: toolbox,
            parameters: parameters,
            example_usage: usage,
        }
    }
}

impl CorralTool for RandomPoints {
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
        let mut output_file = String::new();
        let mut num_points = 100usize;
        let mut pattern = String::from("gaussian");
        let mut num_outliers = 0usize;
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
            if flag_val == "-o" || flag_val == "-output" {
                output_file = if keyval {
                    vec[1].to_string()
                } else {
                    args[i + 1].to_string()
                };
            } else if flag_val == "-num_points" {
                num_points = if keyval {
                    vec[1]
                        .to_string()
                        .parse::<f32>()
                        .expect(&format!("Error parsing {}", flag_val)) as usize
                } else {
                    args[i + 1]
                        .to_string()
                        .parse::<f32>()
                        .expect(&format!("Error parsing {}", flag_val)) as usize
                };
            } else if flag_val == "-pattern" {
                pattern = if keyval {
                    vec[1].to_lowercase()
                } else {
                    args[i + 1].to_lowercase()
                };
            } else if flag_val == "-outliers" {
                num_outliers = if keyval {
                    vec[1]
                        .to_string()
                        .parse::<f32>()
                        .expect(&format!("Error parsing {}", flag_val)) as usize
                } else {
                    args[i + 1]
                        .to_string()
                        .parse::<f32>()
                        .expect(&format!("Error parsing {}", flag_val)) as usize
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
        if !output_file.contains(&sep) && !output_file.contains("/") {
            output_file = format!("{}{}", working_directory, output_file);
        }

        let start = Instant::now();

        let seed_value: u64 = if rng_seed < 0 {
            thread_rng().gen()
        } else {
            rng_seed as u64
        };
        let mut rng = StdRng::seed_from_u64(seed_value);

        if verbose {
            println!(
                "Generating {} points (pattern = {})...",
                num_points + num_outliers,
                pattern
            );
        }
        let points = generate_points(&pattern, num_points, num_outliers, &mut rng)?;

        if verbose {
            println!("Saving data...")
        };
        write_points_file(&output_file, &points)?;
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

fn generate_points(
    pattern: &str,
    num_points: usize,
    num_outliers: usize,
    rng: &mut StdRng,
) -> Result<Vec<Point2D>, Error> {
    let mut points: Vec<Point2D> = Vec::with_capacity(num_points + num_outliers);
    match pattern {
        "gaussian" => {
            let normal = Normal::new(500f64, 125f64).unwrap();
            for _ in 0..num_points {
                points.push(Point2D::new(normal.sample(rng), normal.sample(rng)));
            }
        }
        "uniform" => {
            for _ in 0..num_points {
                points.push(Point2D::new(
                    rng.gen_range(0f64..1000f64),
                    rng.gen_range(0f64..1000f64),
                ));
            }
        }
        "ring" => {
            // nearly every point lands on the convex hull
            for _ in 0..num_points {
                let angle = rng.gen_range(0f64..2f64 * f64::consts::PI);
                let radius = 400f64 + rng.gen_range(-0.5f64..0.5f64);
                points.push(
                    Point2D::new(500f64, 500f64)
                        + Point2D::new(radius * angle.cos(), radius * angle.sin()),
                );
            }
        }
        "huge" => {
            for _ in 0..num_points {
                points.push(Point2D::new(
                    rng.gen_range(-1.0e9..1.0e9),
                    rng.gen_range(-1.0e9..1.0e9),
                ));
            }
        }
        _ => {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Unrecognized point pattern '{}'.", pattern),
            ));
        }
    }

    for _ in 0..num_outliers {
        let angle = rng.gen_range(0f64..2f64 * f64::consts::PI);
        let radius = rng.gen_range(4000f64..6000f64);
        points.push(
            Point2D::new(500f64, 500f64) + Point2D::new(radius * angle.cos(), radius * angle.sin()),
        );
    }
    Ok(points)
}

#[cfg(test)]
mod test {
    use super::generate_points;
    use corral_common::algorithms::{
        smallest_enclosing_circle_naive, smallest_enclosing_circle_with_rng,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-8;

    #[test]
    fn test_generation_is_seeded_and_sized() {
        let mut rng = StdRng::seed_from_u64(25);
        let a = generate_points("gaussian", 50, 4, &mut rng).unwrap();
        assert_eq!(a.len(), 54);

        let mut rng = StdRng::seed_from_u64(25);
        let b = generate_points("gaussian", 50, 4, &mut rng).unwrap();
        assert_eq!(a, b);

        let mut rng = StdRng::seed_from_u64(77);
        assert!(generate_points("spiral", 10, 0, &mut rng).is_err());
    }

    #[test]
    fn test_clustered_cloud_with_outliers_is_solvable() {
        let mut rng = StdRng::seed_from_u64(1234);
        let points = generate_points("gaussian", 1000, 4, &mut rng).unwrap();

        let expected = smallest_enclosing_circle_naive(&points, TOLERANCE);
        let mut solve_rng = StdRng::seed_from_u64(5);
        let actual = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut solve_rng);

        for p in &points {
            assert!(actual.contains(*p, TOLERANCE));
        }
        let r_sqr = expected.radius * expected.radius;
        let center_err = actual.center.square_distance(&expected.center);
        assert!(center_err <= r_sqr * TOLERANCE || center_err <= TOLERANCE);
        let radius_err = (actual.radius - expected.radius).abs();
        assert!(radius_err <= expected.radius * TOLERANCE || radius_err <= TOLERANCE);
    }

    #[test]
    fn test_ring_and_huge_patterns() {
        let mut rng = StdRng::seed_from_u64(52);
        let points = generate_points("ring", 300, 0, &mut rng).unwrap();
        let mut solve_rng = StdRng::seed_from_u64(6);
        let circle = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut solve_rng);
        // the ring has radius 400 with half a unit of jitter
        assert!((circle.radius - 400f64).abs() < 1f64);
        for p in &points {
            assert!(circle.contains(*p, TOLERANCE));
        }

        let mut rng = StdRng::seed_from_u64(53);
        let points = generate_points("huge", 200, 0, &mut rng).unwrap();
        let mut solve_rng = StdRng::seed_from_u64(7);
        let circle = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut solve_rng);
        assert!(circle.radius.is_finite());
        for p in &points {
            assert!(circle.contains(*p, TOLERANCE));
        }
    }
}
