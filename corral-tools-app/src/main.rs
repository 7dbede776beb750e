/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 15/06/2023
Last Modified: 03/02/2024
License: MIT
*/

/*!
Corral is a command-line toolkit for planar point-set analysis, centred on
minimum enclosing circles and convex hulls.

Corral can be run either by calling it, with appropriate commands and
arguments, from a terminal application, or, more conveniently, by calling it
from a script. The following commands are recognized:

| Command           | Description                                                                                        |
| ----------------- | -------------------------------------------------------------------------------------------------- |
| --cd, --wd        | Changes the working directory; used in conjunction with --run flag.                                |
| -h, --help        | Prints help information.                                                                           |
| -l, --license     | Prints the license.                                                                                |
| --listtools       | Lists all available tools, with tool descriptions. Keywords may also be used, --listtools circle.  |
| -r, --run         | Runs a tool; used in conjunction with --cd flag; -r="MinimumEnclosingCircle".                      |
| --toolbox         | Prints the toolbox associated with a tool; --toolbox=ConvexHull.                                   |
| --toolhelp        | Prints the help associated with a tool; --toolhelp="RandomPoints".                                 |
| --toolparameters  | Prints the parameters (in json form) for a specific tool; --toolparameters=\"RandomPoints\".       |
| -v                | Verbose mode. Without this flag, tool outputs will not be printed.                                 |
| --viewcode        | Opens the source code of a tool in a web browser; --viewcode=\"ConvexHull\".                       |
| --version         | Prints the version information.                                                                    |

*/

pub mod tools;

use crate::tools::ToolManager;
use std::env;
use std::io::Error;
use std::path;

#[macro_use]
extern crate serde_derive;

/// Corral is a command-line toolkit for planar point-set analysis.
///
/// # Examples
///
/// From the command line prompt, *Corral* can be called to run a tool as follows:
///
/// ```
/// >>./corral_tools --wd='/Users/swhitfield/Documents/data/' --run=MinimumEnclosingCircle -i=points.txt -o=circle.txt -v
/// ```

fn main() {
    match run() {
        Ok(()) => {}
        Err(err) => panic!("{}", err),
    }
}

fn run() -> Result<(), Error> {
    let sep: &str = &path::MAIN_SEPARATOR.to_string();
    let mut working_dir = String::new();
    let mut tool_name = String::new();
    let mut run_tool = false;
    let mut tool_help = false;
    let mut tool_parameters = false;
    let mut toolbox = false;
    let mut list_tools = false;
    let mut keywords: Vec<String> = vec![];
    let mut view_code = false;
    let mut tool_args_vec: Vec<String> = vec![];
    let mut finding_working_dir = false;
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        version();
        // print help
        help();
        // list tools
        let tm = ToolManager::new(&working_dir, &false)?;
        tm.list_tools();

        return Ok(());
    }

    let mut configs = corral_common::configs::get_configs()?;
    let mut configs_modified = false;

    for arg in args {
        let flag_val = arg.to_lowercase().replace("--", "-");
        if flag_val == "-h" || flag_val == "-help" {
            help();
            return Ok(());
        } else if flag_val.starts_with("-cd")
            || flag_val.starts_with("-wd")
            || flag_val.starts_with("-working_directory")
        {
            let mut v = arg
                .replace("--cd", "")
                .replace("--wd", "")
                .replace("--working_directory", "")
                .replace("-cd", "")
                .replace("-wd", "")
                .replace("-working_directory", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            if v.trim().is_empty() {
                finding_working_dir = true;
            }
            if !v.ends_with(sep) {
                v.push_str(sep);
            }
            working_dir = v.to_string();
            if configs.working_directory != working_dir {
                // update the value
                configs.working_directory = working_dir.clone();
                configs_modified = true;
            }
        } else if arg.starts_with("-run") || arg.starts_with("--run") || arg.starts_with("-r") {
            let mut v = arg
                .replace("--run", "")
                .replace("-run", "")
                .replace("-r", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            run_tool = true;
        } else if arg.starts_with("-toolhelp") || arg.starts_with("--toolhelp") {
            let mut v = arg
                .replace("--toolhelp", "")
                .replace("-toolhelp", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            tool_help = true;
        } else if arg.starts_with("-toolparameters") || arg.starts_with("--toolparameters") {
            let mut v = arg
                .replace("--toolparameters", "")
                .replace("-toolparameters", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            tool_parameters = true;
        } else if arg.starts_with("-toolbox") || arg.starts_with("--toolbox") {
            let mut v = arg
                .replace("--toolbox", "")
                .replace("-toolbox", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            toolbox = true;
        } else if arg.starts_with("-listtools")
            || arg.starts_with("--listtools")
            || arg.starts_with("-list_tools")
            || arg.starts_with("--list_tools")
        {
            list_tools = true;
        } else if arg.starts_with("-viewcode") || arg.starts_with("--viewcode") {
            let mut v = arg
                .replace("--viewcode", "")
                .replace("-viewcode", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            view_code = true;
        } else if arg.starts_with("-license")
            || arg.starts_with("-licence")
            || arg.starts_with("--license")
            || arg.starts_with("--licence")
            || arg.starts_with("-l")
        {
            tool_name = arg
                .replace("--license", "")
                .replace("-license", "")
                .replace("--licence", "")
                .replace("-licence", "")
                .replace("\"", "")
                .replace("\'", "");
            if tool_name.starts_with("=") {
                tool_name = tool_name[1..tool_name.len()].to_string();
                if !tool_name.is_empty() {
                    let tm = ToolManager::new(&configs.working_directory, &configs.verbose_mode)?;
                    return tm.tool_license(tool_name);
                }
            } else {
                license();
            }
            return Ok(());
        } else if arg.starts_with("-version") || arg.starts_with("--version") {
            version();
            return Ok(());
        } else if arg.starts_with("-v") || arg.starts_with("--verbose") {
            let mut v = arg
                .replace("-v", "")
                .replace("--verbose", "")
                .replace("-verbose", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            if v.to_lowercase().contains("t") || v.is_empty() {
                if !configs.verbose_mode {
                    configs.verbose_mode = true;
                    configs_modified = true;
                }
            } else {
                if configs.verbose_mode {
                    configs.verbose_mode = false;
                    configs_modified = true;
                }
            }
        } else if arg.starts_with("-") {
            // it's an arg to be fed to the tool
            tool_args_vec.push(arg.trim().to_string().clone());
        } else if !arg.contains("corral_tools") {
            // add it to the keywords list
            keywords.push(
                arg.trim()
                    .replace("\"", "")
                    .replace("\'", "")
                    .to_string()
                    .clone(),
            );
            if finding_working_dir {
                working_dir = arg.trim().to_string().clone();
                finding_working_dir = false;
                configs.working_directory = working_dir.clone();
                configs_modified = true;
            } else if tool_args_vec.len() > 0 {
                tool_args_vec.push(arg.trim().to_string().clone());
            }
        }
    }

    if configs_modified {
        corral_common::configs::save_configs(&configs)?;
    }

    let tm = ToolManager::new(&configs.working_directory, &configs.verbose_mode)?;
    if run_tool {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.run_tool(tool_name, tool_args_vec);
    } else if tool_help {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.tool_help(tool_name);
    } else if tool_parameters {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.tool_parameters(tool_name);
    } else if toolbox {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.toolbox(tool_name);
    } else if list_tools {
        if keywords.len() == 0 {
            tm.list_tools();
        } else {
            tm.list_tools_with_keywords(keywords);
        }
    } else if view_code {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.get_tool_source_code(tool_name);
    }

    Ok(())
}

fn help() {
    let mut ext = "";
    if cfg!(target_os = "windows") {
        ext = ".exe";
    }

    let exe_name = &format!("corral_tools{}", ext);
    let sep: String = path::MAIN_SEPARATOR.to_string();
    let s = "Corral Help

The following commands are recognized:
--cd, --wd          Changes the working directory; used in conjunction with --run flag.
-h, --help          Prints help information.
-l, --license       Prints the license. Tool names may also be used, --license=\"ConvexHull\"
--listtools         Lists all available tools. Keywords may also be used, --listtools circle.
-r, --run           Runs a tool; used in conjunction with --wd flag; -r=\"MinimumEnclosingCircle\".
--toolbox           Prints the toolbox associated with a tool; --toolbox=ConvexHull.
--toolhelp          Prints the help associated with a tool; --toolhelp=\"RandomPoints\".
--toolparameters    Prints the parameters (in json form) for a specific tool; --toolparameters=\"RandomPoints\".
-v                  Verbose mode. Without this flag, tool outputs will not be printed.
--viewcode          Opens the source code of a tool in a web browser; --viewcode=\"ConvexHull\".
--version           Prints the version information.

Example Usage:
>> .*EXE_NAME -r=MinimumEnclosingCircle --cd=\"*path*to*data*\" -i=points.txt -o=circle.txt -v
"
    .replace("*", &sep)
    .replace("EXE_NAME", exe_name);
    println!("{}", s);
}

fn license() {
    let license_text = "Corral License
Copyright 2022-2024 Sam Whitfield

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the \"Software\"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES
OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.";
    println!("{}", license_text);
}

fn version() {
    const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
    println!(
        "Corral v{} by Sam Whitfield (c) 2022-2024

Corral is a command-line toolkit for planar point-set analysis, including
minimum enclosing circles, convex hulls, point-set generation, and solver
validation. See the project repository for more details.",
        VERSION.unwrap_or("unknown")
    );
}
