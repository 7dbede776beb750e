/*
This tool is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 05/07/2023
Last Modified: 03/02/2024
License: MIT
*/

use crate::tools::*;
use corral_common::algorithms::{smallest_enclosing_circle_naive, smallest_enclosing_circle_with_rng};
use corral_common::structures::{Circle, Point2D};
use corral_common::utils::{get_formatted_elapsed_time, read_points_file};
use rand::prelude::*;
use std::env;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path;
use std::time::Instant;

/// This tool checks the randomized enclosing-circle solver against a brute-force solver
/// that is slow but simple enough to trust. The input (`--input`) is either a single
/// points file or a directory, in which case every `.txt` file in the directory becomes a
/// validation case, processed in name order. For each case, both solvers are run and the
/// tool reports whether the two circles agree to within the tolerance (`--tolerance`) and
/// whether every input point is contained in the randomized solver's circle. One line is
/// printed per case, `[OK]` or `[NG]`, along with the solve time of the randomized solver;
/// the brute-force solver is excluded from the timing. A summary follows the cases, and
/// the tool errs if any case failed.
///
/// Supplying `--seed` fixes the shuffled visiting order used by the randomized solver,
/// making the run repeatable.
///
/// # See Also
/// `MinimumEnclosingCircle`, `RandomPoints`
pub struct ValidateEnclosingCircle {
    name: String,
    description: String,
    toolbox: String,
    parameters: Vec<ToolParameter>,
    example_usage: String,
}

impl ValidateEnclosingCircle {
    pub fn new() -> ValidateEnclosingCircle {
        // public constructor
        let name = "ValidateEnclosingCircle".to_string();
        let toolbox = "Validation Tools".to_string();
        let description =
            "Checks the enclosing-circle solver against a brute-force solver.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Points File or Directory".to_owned(),
            flags: vec!["-i".to_owned(), "--input".to_owned()],
            description: "Input points file, or a directory of points files.".to_owned(),
            parameter_type: ParameterType::ExistingFile(ParameterFileType::Any),
            default_value: None,
            optional: false,
        });

        parameters.push(ToolParameter {
            name: "Containment Tolerance".to_owned(),
            flags: vec!["--tolerance".to_owned()],
            description: "Relative and absolute tolerance used when comparing circles."
                .to_owned(),
            parameter_type: ParameterType::Float,
            default_value: Some("1e-8".to_owned()),
            optional: true,
        });

        parameters.push(ToolParameter {
            name: "Random Seed".to_owned(),
            flags: vec!["--seed".to_owned()],
            description: "Seed for the randomized solver; leave unset for a random seed."
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
            ">>.*{0} -r={1} -v --wd=\"*path*to*data*\" -i=cases --seed=25",
            short_exe, name
        )
        .replace("*", &sep);

        ValidateEnclosingCircle {
            name: name,
            description: description,
            toolbox: toolbox,
            parameters: parameters,
            example_usage: usage,
        }
    }
}

impl CorralTool for ValidateEnclosingCircle {
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

        let start = Instant::now();

        let mut case_files: Vec<String> = vec![];
        let input_path = path::Path::new(&input_file);
        if input_path.is_dir() {
            for entry in fs::read_dir(input_path)? {
                let entry = entry?;
                let entry_path = entry.path();
                if !entry_path.is_dir() {
                    let file_name = entry_path.to_string_lossy().to_string();
                    if file_name.to_lowercase().ends_with(".txt") {
                        case_files.push(file_name);
                    }
                }
            }
            case_files.sort();
            if case_files.is_empty() {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "No .txt points files were found in the input directory.",
                ));
            }
        } else {
            case_files.push(input_file.clone());
        }
        if verbose {
            println!(
                "Validating {} case{}...",
                case_files.len(),
                if case_files.len() == 1 { "" } else { "s" }
            );
        }

        let seed_value: u64 = if rng_seed < 0 {
            thread_rng().gen()
        } else {
            rng_seed as u64
        };
        let mut rng = StdRng::seed_from_u64(seed_value);

        let mut results: Vec<CaseResult> = Vec::with_capacity(case_files.len());
        for (case_num, case_file) in case_files.iter().enumerate() {
            let points = read_points_file(case_file)?;
            if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("Non-finite coordinates found in '{}'.", case_file),
                ));
            }
            let result = run_case(&points, tolerance, &mut rng);
            let short_name = match path::Path::new(case_file).file_name() {
                Some(n) => n.to_string_lossy().to_string(),
                None => case_file.clone(),
            };
            println!(
                "case {} ({}): [{}] in {:.9} sec",
                case_num + 1,
                short_name,
                if result.succeeded { "OK" } else { "NG" },
                result.solve_time
            );
            if !result.succeeded {
                println!(
                    "  expected: (center, r) = ({}, {})",
                    result.expected.center, result.expected.radius
                );
                println!(
                    "  actual:   (center, r) = ({}, {})",
                    result.actual.center, result.actual.radius
                );
            }
            results.push(result);
        }

        let num_cases = results.len();
        let failures = results.iter().filter(|r| !r.succeeded).count();
        let mean_time = results.iter().map(|r| r.solve_time).sum::<f64>() / num_cases as f64;
        println!(
            "Validated {} case{}: {} succeeded, {} failed.",
            num_cases,
            if num_cases == 1 { "" } else { "s" },
            num_cases - failures,
            failures
        );
        println!("Mean solve time: {:.9} sec", mean_time);

        let elapsed_time = get_formatted_elapsed_time(start);

        if verbose {
            println!("{}", &format!("Elapsed Time: {}", elapsed_time));
        }

        if failures > 0 {
            return Err(Error::new(
                ErrorKind::Other,
                format!("{} of {} validation cases failed.", failures, num_cases),
            ));
        }

        Ok(())
    }
}

struct CaseResult {
    succeeded: bool,
    solve_time: f64,
    actual: Circle,
    expected: Circle,
}

fn run_case(points: &[Point2D], tolerance: f64, rng: &mut StdRng) -> CaseResult {
    let expected = smallest_enclosing_circle_naive(points, tolerance);

    let solve_start = Instant::now();
    let actual = smallest_enclosing_circle_with_rng(points, tolerance, rng);
    let solve_time = solve_start.elapsed().as_secs_f64();

    let succeeded = circles_agree(&actual, &expected, tolerance)
        && points.iter().all(|p| actual.contains(*p, tolerance));
    CaseResult {
        succeeded: succeeded,
        solve_time: solve_time,
        actual: actual,
        expected: expected,
    }
}

// The comparison mirrors the containment test, with the same relative and absolute
// branches applied to the centre offset and to the radius difference.
fn circles_agree(actual: &Circle, expected: &Circle, tolerance: f64) -> bool {
    if !actual.radius.is_finite() || !expected.radius.is_finite() {
        return false;
    }
    let r_sqr = expected.radius * expected.radius;
    let center_err = actual.center.square_distance(&expected.center);
    if !(center_err <= r_sqr * tolerance || center_err <= tolerance) {
        return false;
    }
    let radius_err = (actual.radius - expected.radius).abs();
    radius_err <= expected.radius * tolerance || radius_err <= tolerance
}

#[cfg(test)]
mod test {
    use super::{circles_agree, run_case};
    use corral_common::structures::{Circle, Point2D};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOLERANCE: f64 = 1e-8;

    #[test]
    fn test_circles_agree() {
        let a = Circle::new(Point2D::new(2f64, 1.5f64), 2.5f64);
        let b = Circle::new(Point2D::new(2f64, 1.5f64 + 1e-12), 2.5f64 + 1e-12);
        assert!(circles_agree(&a, &b, TOLERANCE));
        assert!(circles_agree(&b, &a, TOLERANCE));

        let shifted = Circle::new(Point2D::new(2f64, 1.6f64), 2.5f64);
        assert!(!circles_agree(&a, &shifted, TOLERANCE));
        let widened = Circle::new(Point2D::new(2f64, 1.5f64), 2.6f64);
        assert!(!circles_agree(&a, &widened, TOLERANCE));

        let undefined = Circle::new(Point2D::new(2f64, 1.5f64), f64::NAN);
        assert!(!circles_agree(&a, &undefined, TOLERANCE));
        assert!(!circles_agree(&undefined, &a, TOLERANCE));
    }

    #[test]
    fn test_run_case_on_right_triangle() {
        let points = vec![
            Point2D::new(0f64, 0f64),
            Point2D::new(4f64, 0f64),
            Point2D::new(0f64, 3f64),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_case(&points, TOLERANCE, &mut rng);
        assert!(result.succeeded);
        assert_eq!(
            result.actual,
            Circle::new(Point2D::new(2f64, 1.5f64), 2.5f64)
        );
        assert_eq!(result.expected, result.actual);
    }

    #[test]
    fn test_run_case_on_random_cloud() {
        let mut rng = StdRng::seed_from_u64(30);
        let points: Vec<Point2D> = (0..30)
            .map(|_| Point2D::new(rng.gen_range(0f64..100f64), rng.gen_range(0f64..100f64)))
            .collect();
        let mut solve_rng = StdRng::seed_from_u64(31);
        let result = run_case(&points, TOLERANCE, &mut solve_rng);
        assert!(result.succeeded);
        assert!(result.solve_time >= 0f64);
    }
}
