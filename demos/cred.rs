//! Extract credentials from an envelope built in code.

use std::collections::BTreeMap;
use std::process::ExitCode;

use vcap_services::{extract_credentials, Binding, Credentials, Envelope};

fn main() -> ExitCode {
    let binding = Binding {
        name: Some("Service A".to_string()),
        credentials: Credentials {
            uri: Some("example_uri".to_string()),
            ..Credentials::default()
        },
        ..Binding::default()
    };
    let envelope = Envelope::from(BTreeMap::from([("serviceA".to_string(), vec![binding])]));

    match extract_credentials(&envelope, "serviceA") {
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
