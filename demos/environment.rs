//! Extract credentials for one service from an environment source.

use std::collections::HashMap;
use std::process::ExitCode;

use vcap_services::{VcapServices, VCAP_SERVICES};

const SAMPLE: &str = r#"{
  "serviceA": [
    {
      "name": "service_a",
      "credentials": {
        "uri": "example_uri"
      }
    }
  ]
}"#;

fn main() -> ExitCode {
    // Use the real process environment when it carries bindings.
    let services = VcapServices::new();
    let services = match services.is_configured() {
        Ok(true) => services,
        _ => services.with_source(HashMap::from([(
            VCAP_SERVICES.to_string(),
            SAMPLE.to_string(),
        )])),
    };

    match services.credentials("serviceA") {
        Ok(creds) => {
            println!("{:#?}", creds);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
