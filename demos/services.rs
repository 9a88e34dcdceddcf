//! Decode every service in the envelope and print it as JSON.

use std::collections::HashMap;
use std::process::ExitCode;

use vcap_services::{ServicesError, VcapServices, VCAP_SERVICES};

const SAMPLE: &str = r#"{
  "serviceA": [
    {
      "name": "service_a",
      "credentials": {
        "uri": "example_uri",
        "port": 8080,
        "region": "eu-de"
      }
    }
  ]
}"#;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServicesError> {
    let services = VcapServices::new();
    let services = if services.is_configured()? {
        services
    } else {
        services.with_source(HashMap::from([(
            VCAP_SERVICES.to_string(),
            SAMPLE.to_string(),
        )]))
    };

    let envelope = services.services()?;
    for name in envelope.service_names() {
        println!("{}", name);
    }
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
