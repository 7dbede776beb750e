/*
This tool is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 27/06/2023
Last Modified: 27/06/2023
License: MIT
*/

use crate::tools::*;
use corral_common::algorithms::convex_hull;
use corral_common::utils::{get_formatted_elapsed_time, read_points_file, write_points_file};
use std::env;
use std::io::{Error, ErrorKind};
use std::path;
use std::time::Instant;

/// This tool computes the convex hull of the points in the input points file (`--input`)
/// using Andrew's monotone chain algorithm and writes the hull vertices to the output
/// points file (`--output`). The vertices are in counter-clockwise order, starting from
/// the point with the lowest x-coordinate (ties broken by the lowest y-coordinate), and
/// interior collinear points are excluded. When the input holds fewer than three distinct
/// points, the distinct points are written in sorted order instead.
///
/// # See Also
/// `MinimumEnclosingCircle`
pub struct ConvexHull {
    name: String,
    description: String,
    toolbox: String,
    parameters: Vec<ToolParameter>,
    example_usage: String,
}

impl ConvexHull {
    pub fn new() -> ConvexHull {
        // public constructor
        let name = "ConvexHull".to_string();
        let toolbox = "Geometry Analysis".to_string();
        let description = "Computes the convex hull of a set of points.".to_string();

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
            name: "Output Points File".to_owned(),
            flags: vec!["-o".to_owned(), "--output".to_owned()],
            description: "Output points file holding the hull vertices.".to_owned(),
            parameter_type: ParameterType::NewFile(ParameterFileType::Text),
            default_value: None,
            optional: false,
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
            ">>.*{0} -r={1} -v --wd=\"*path*to*data*\" -i=points.txt -o=hull.txt",
            short_exe, name
        )
        .replace("*", &sep);

        ConvexHull {
            name: name,
            description: description,
            toolbox: toolbox,
            parameters: parameters,
            example_usage: usage,
        }
    }
}

impl CorralTool for ConvexHull {
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
        let mut s = String::from("{\"parameters\": [");
        for i in 0..self.parameters.len() {
            if i < self.parameters.len() - 1 {
                s.push_str(&(self.parameters[i].to_string()));
                s.push_str(",");
            } else {
                s.push_str(&(self.parameters[i].to_string()));
            }
        }
        s.push_str("]}");
        s
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
        }

        let hull = convex_hull(&points);
        if verbose {
            println!("The hull has {} vertices.", hull.len());
        }

        if verbose {
            println!("Saving data...")
        };
        write_points_file(&output_file, &hull)?;
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
