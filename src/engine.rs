use crate::configs;
use serde_json;
use std::collections::BTreeMap;
use std::env;
use std::io::{Error, ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// One invocation of the external geoprocessing engine: the fully qualified
/// tool name and the ordered parameter array, plus any environment settings
/// the tool honors. This is the whole contract; all computation happens on
/// the other side of it.
#[derive(Serialize, Debug, Clone)]
pub struct EngineRequest {
    pub tool: String,
    pub parameters: Vec<String>,
    pub environment: BTreeMap<String, String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineResponse {
    pub status: String,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub outputs: BTreeMap<String, String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Client for the engine subprocess. The request is written as JSON on the
/// child's stdin and the response read as JSON from its stdout.
pub struct EngineClient {
    engine_path: PathBuf,
}

impl EngineClient {
    pub fn new(engine_path: PathBuf) -> EngineClient {
        EngineClient {
            engine_path: engine_path,
        }
    }

    /// Resolves the engine binary: `engine_path` in settings.json, then the
    /// GP_ENGINE environment variable, then `engine[.exe]` beside the
    /// executable.
    pub fn locate() -> Result<EngineClient, Error> {
        let configs = configs::get_configs()?;
        if !configs.engine_path.is_empty() {
            return Ok(EngineClient::new(PathBuf::from(configs.engine_path)));
        }
        if let Ok(p) = env::var("GP_ENGINE") {
            if !p.is_empty() {
                return Ok(EngineClient::new(PathBuf::from(p)));
            }
        }
        let mut dir = env::current_exe()?;
        dir.pop();
        let ext = if cfg!(target_os = "windows") {
            ".exe"
        } else {
            ""
        };
        dir.push(format!("engine{}", ext));
        if !dir.is_file() {
            return Err(Error::new(
                ErrorKind::NotFound,
                "No geoprocessing engine found. Set engine_path in settings.json or the GP_ENGINE environment variable.",
            ));
        }
        Ok(EngineClient::new(dir))
    }

    pub fn execute(&self, request: &EngineRequest) -> Result<EngineResponse, Error> {
        let payload = serde_json::to_string(request)
            .map_err(|e| Error::new(ErrorKind::InvalidData, format!("{:?}", e)))?;

        let mut child = Command::new(&self.engine_path)
            .arg("run")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        match child.stdin.as_mut() {
            Some(stdin) => stdin.write_all(payload.as_bytes())?,
            None => {
                return Err(Error::new(
                    ErrorKind::BrokenPipe,
                    "Failed to open the engine's stdin.",
                ))
            }
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::new(
                ErrorKind::Other,
                format!(
                    "Engine subprocess exited with {} running {}.",
                    output.status, request.tool
                ),
            ));
        }
        let response: EngineResponse = serde_json::from_slice(&output.stdout).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("Malformed engine response: {:?}", e),
            )
        })?;
        if response.status != "ok" {
            return Err(Error::new(
                ErrorKind::Other,
                response
                    .error
                    .unwrap_or_else(|| format!("Engine reported failure running {}.", request.tool)),
            ));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_ordered_parameters() {
        let mut environment = BTreeMap::new();
        environment.insert("workspace".to_string(), "/data/gp.gdb".to_string());
        let request = EngineRequest {
            tool: "sa.RegionGroup".to_string(),
            parameters: vec![
                "landcover.tif".to_string(),
                "regions.tif".to_string(),
                "FOUR".to_string(),
                "WITHIN".to_string(),
                "true".to_string(),
                "#".to_string(),
            ],
            environment: environment,
        };
        let v: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(v["tool"], "sa.RegionGroup");
        let params = v["parameters"].as_array().unwrap();
        assert_eq!(params.len(), 6);
        assert_eq!(params[2], "FOUR");
        assert_eq!(params[5], "#");
        assert_eq!(v["environment"]["workspace"], "/data/gp.gdb");
    }

    #[test]
    fn response_defaults_apply_when_fields_are_absent() {
        let response: EngineResponse = serde_json::from_str("{\"status\":\"ok\"}").unwrap();
        assert_eq!(response.status, "ok");
        assert!(response.messages.is_empty());
        assert!(response.outputs.is_empty());
        assert!(response.error.is_none());
    }

    #[test]
    fn response_carries_derived_outputs() {
        let response: EngineResponse = serde_json::from_str(
            "{\"status\":\"ok\",\"messages\":[\"Build complete.\"],\"outputs\":{\"derived_out_terrain\":\"gis.gdb/fds/terrain\"}}",
        )
        .unwrap();
        assert_eq!(response.messages.len(), 1);
        assert_eq!(
            response.outputs.get("derived_out_terrain").unwrap(),
            "gis.gdb/fds/terrain"
        );
    }
}
