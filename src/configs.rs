use serde_json;
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::io::Error;
use std::path;

/// A structure to hold environment settings. Backed by settings.json file in same directory
#[derive(Serialize, Deserialize, Debug)]
pub struct Configs {
    pub verbose_mode: bool,
    pub working_directory: String,
    pub engine_path: String,
}

impl Configs {
    pub fn new() -> Configs {
        Configs {
            verbose_mode: true,
            working_directory: String::new(),
            engine_path: String::new(),
        }
    }
}

pub fn get_configs() -> std::result::Result<Configs, Error> {
    let exe_path = std::env::current_dir()?
        .to_str()
        .unwrap_or("No exe path found.")
        .to_string();
    let config_file = exe_path + &path::MAIN_SEPARATOR.to_string() + "settings.json";
    let configs: Configs = match fs::read_to_string(config_file) {
        Ok(contents) => {
            serde_json::from_str(&contents).expect("Failed to parse settings.json file.")
        }
        Err(_) => Configs::new(),
    };
    Ok(configs)
}

pub fn save_configs(configs: &Configs) -> std::result::Result<(), Error> {
    let configs_json =
        serde_json::to_string_pretty(&configs).expect("Error converting Configs object to JSON.");
    let exe_path = std::env::current_dir()?
        .to_str()
        .unwrap_or("No exe path found.")
        .to_string();
    let config_file = exe_path + &path::MAIN_SEPARATOR.to_string() + "settings.json";
    let mut file = File::create(config_file).expect("Error creating output settings.json file.");
    file.write_all(configs_json.as_bytes())
        .expect("Error writing to output settings.json file.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_verbose_with_no_paths() {
        let c = Configs::new();
        assert!(c.verbose_mode);
        assert!(c.working_directory.is_empty());
        assert!(c.engine_path.is_empty());
    }

    #[test]
    fn configs_round_trip_through_json() {
        let c = Configs {
            verbose_mode: false,
            working_directory: "/data/".to_string(),
            engine_path: "/opt/gp/engine".to_string(),
        };
        let s = serde_json::to_string(&c).unwrap();
        let c2: Configs = serde_json::from_str(&s).unwrap();
        assert_eq!(c2.verbose_mode, c.verbose_mode);
        assert_eq!(c2.working_directory, c.working_directory);
        assert_eq!(c2.engine_path, c.engine_path);
    }
}
