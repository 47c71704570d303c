/*!
GPTools is a command-line catalog of geoprocessing tool signatures and a thin
client for an external geoprocessing engine. Each tool describes the engine's
call contract (execute name, ordered parameter list, coded-value domains, and
honored environment settings); the engine binary performs the actual
computation. The following commands are recognized:

| Command           | Description                                                                          |
| ----------------- | ------------------------------------------------------------------------------------ |
| --cd, --wd        | Changes the working directory; used in conjunction with --run flag.                  |
| --env             | Supplies an environment setting for a run, e.g. --env=workspace=/data/gp.gdb.        |
| --environments    | Prints the environment settings a tool honors; --environments=RegionGroup.           |
| --executename     | Prints the fully qualified engine name of a tool; --executename=BuildTerrain.        |
| -h, --help        | Prints help information.                                                             |
| --listtools       | Lists all available tools, with tool descriptions. Keywords may also be used.        |
| -r, --run         | Runs a tool; used in conjunction with --wd flag; -r="BuildTerrain".                  |
| --toolbox         | Prints the toolbox associated with a tool; --toolbox=Nibble.                         |
| --toolhelp        | Prints the help associated with a tool; --toolhelp="RegionGroup".                    |
| --toolparameters  | Prints the parameters (in json form) for a specific tool; --toolparameters="Thin".   |
| -v                | Verbose mode. Without this flag, engine messages will not be printed.                |
| --version         | Prints the version information.                                                      |

*/

pub mod configs;
pub mod engine;
pub mod tools;
pub mod utils;

use crate::tools::ToolManager;
use std::env;
use std::io::Error;
use std::path;

#[macro_use]
extern crate serde_derive;

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
    let mut environments = false;
    let mut execute_name = false;
    let mut list_tools = false;
    let mut keywords: Vec<String> = vec![];
    let mut tool_args_vec: Vec<String> = vec![];
    let mut env_args_vec: Vec<String> = vec![];
    let mut finding_working_dir = false;
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        version();
        help();
        let tm = ToolManager::new(&working_dir, &false)?;
        tm.list_tools();
        return Ok(());
    }

    let mut configs = configs::get_configs()?;
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
                configs.working_directory = working_dir.clone();
                configs_modified = true;
            }
        } else if flag_val.starts_with("-environments") {
            let mut v = arg
                .replace("--environments", "")
                .replace("-environments", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            environments = true;
        } else if flag_val.starts_with("-executename") {
            let mut v = arg
                .replace("--executename", "")
                .replace("-executename", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            execute_name = true;
        } else if flag_val.starts_with("-engine_path") {
            let mut v = arg
                .replace("--engine_path", "")
                .replace("-engine_path", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            if configs.engine_path != v {
                configs.engine_path = v;
                configs_modified = true;
            }
        } else if flag_val.starts_with("-env") {
            let mut v = arg
                .replace("--env", "")
                .replace("-env", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            if !v.is_empty() {
                env_args_vec.push(v);
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
        } else if arg.starts_with("-v") || arg.starts_with("--verbose") {
            let mut v = arg
                .replace("--verbose", "")
                .replace("-verbose", "")
                .replace("-v", "")
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
        } else if arg.starts_with("-version") || arg.starts_with("--version") {
            version();
            return Ok(());
        } else if arg.starts_with("-") {
            // it's an arg to be fed to the tool
            tool_args_vec.push(arg.trim().to_string().clone());
        } else if !arg.contains("gptools") {
            // add it to the keywords list
            keywords.push(arg.trim().replace("\"", "").replace("\'", "").to_string());
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
        configs::save_configs(&configs)?;
    }

    let tm = ToolManager::new(&configs.working_directory, &configs.verbose_mode)?;
    if run_tool {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.run_tool(tool_name, tool_args_vec, env_args_vec);
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
    } else if environments {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.valid_environments(tool_name);
    } else if execute_name {
        if tool_name.is_empty() && keywords.len() > 0 {
            tool_name = keywords[0].clone();
        }
        return tm.execute_name(tool_name);
    } else if list_tools {
        if keywords.len() == 0 {
            tm.list_tools();
        } else {
            tm.list_tools_with_keywords(keywords);
        }
    }

    Ok(())
}

fn help() {
    let mut ext = "";
    if cfg!(target_os = "windows") {
        ext = ".exe";
    }

    let exe_name = &format!("gptools{}", ext);
    let sep: String = path::MAIN_SEPARATOR.to_string();
    let s = "GPTools Help

The following commands are recognized:
--cd, --wd          Changes the working directory; used in conjunction with --run flag.
--engine_path       Sets the path of the geoprocessing engine binary in the settings.json file.
--env               Supplies an environment setting for a run, e.g. --env=workspace=/data/gp.gdb.
--environments      Prints the environment settings a tool honors; --environments=RegionGroup.
--executename       Prints the fully qualified engine name of a tool; --executename=BuildTerrain.
-h, --help          Prints help information.
--listtools         Lists all available tools. Keywords may also be used, --listtools terrain.
-r, --run           Runs a tool; used in conjunction with --wd flag; -r=\"BuildTerrain\".
--toolbox           Prints the toolbox associated with a tool; --toolbox=Nibble.
--toolhelp          Prints the help associated with a tool; --toolhelp=\"RegionGroup\".
--toolparameters    Prints the parameters (in json form) for a specific tool; --toolparameters=\"Thin\".
-v                  Verbose mode. Without this flag, engine messages will not be printed.
--version           Prints the version information.

Example Usage:
>> .*EXE_NAME -r=RegionGroup --wd=\"*path*to*data*\" --in_raster=landcover.tif --out_raster=regions.tif --number_neighbors=EIGHT -v
"
    .replace("*", &sep)
    .replace("EXE_NAME", exe_name);
    println!("{}", s);
}

fn version() {
    const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
    println!(
        "GPTools v{}

GPTools is a typed catalog of geoprocessing tool signatures and a client
for an external geoprocessing engine. The engine binary performs all
computation; this program describes and forwards the call contracts.",
        VERSION.unwrap_or("unknown")
    );
}
