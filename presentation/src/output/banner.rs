//! Static texts of the main menu: banner, disclaimer and `info`

use osrf_application::ConfigLocation;
use osrf_domain::ToolKind;

const BANNER: &str = r#"
     ___  ____  ____  _____                                          _
    / _ \/ ___||  _ \|  ___| __ __ _ _ __ ___   _____      _____  _ __| | __
   | | | \___ \| |_) | |_ | '__/ _` | '_ ` _ \ / _ \ \ /\ / / _ \| '__| |/ /
   | |_| |___) |  _ <|  _|| | | (_| | | | | | |  __/\ V  V / (_) | |  |   <
    \___/|____/|_| \_\_|  |_|  \__,_|_| |_| |_|\___| \_/\_/ \___/|_|  |_|\_\
"#;

/// Order in which the utils are presented
const PRESENTATION_ORDER: [ToolKind; 6] = [
    ToolKind::Usufy,
    ToolKind::Mailfy,
    ToolKind::Searchfy,
    ToolKind::Domainfy,
    ToolKind::Phonefy,
    ToolKind::Entify,
];

pub fn banner() -> &'static str {
    BANNER
}

pub fn disclaimer(version: &str) -> String {
    format!(
        "\tOSRFConsole {version} - Copyright (C) F. Brezo and Y. Rubio (i3visio) 2016-2017

    This program comes with ABSOLUTELY NO WARRANTY. This software is free software,
    and you are really welcome to redistribute it under certain conditions. For
    additional information about the terms and conditions of the AGPLv3+ license,
    visit <http://www.gnu.org/licenses/agpl-3.0.txt>."
    )
}

/// General information about the framework and its utils
pub fn general_info() -> String {
    let mut text = String::from(
        "    General information
    ===================

    OSRFramework stands for Open Sources Research Framework. It includes a set
    of tools that help the analyst in the task of user profiling making use of
    different OSINT tools.

    To get additional information about the available commands type 'help'.

    Modules available:
    ------------------
",
    );

    for tool in PRESENTATION_ORDER {
        text.push_str(&format!("\n        - {} --> {}", tool, tool.summary()));
    }
    text.push('\n');
    text
}

/// Listing of the configuration files the utils read
pub fn config_info(locations: &[ConfigLocation]) -> String {
    let mut text = String::from(
        "
    Additional configuration files:
    -------------------------------

    You will be able to find more configuration options in the following files
    in your system. The relevant paths are the ones that follow:",
    );

    for location in locations {
        text.push_str(&format!(
            "\n        - {}:\n            {}",
            location.description,
            location.path.display()
        ));
    }
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_general_info_lists_every_tool() {
        let info = general_info();
        for tool in ToolKind::ALL {
            assert!(info.contains(&format!("- {} -->", tool)), "{tool} missing");
        }
    }

    #[test]
    fn test_config_info_lists_locations() {
        let locations = vec![ConfigLocation {
            description: "General default configuration of the utils".to_string(),
            path: PathBuf::from("/home/osint/.config/osrframework/general.toml"),
        }];
        let info = config_info(&locations);
        assert!(info.contains("General default configuration of the utils:"));
        assert!(info.contains("/home/osint/.config/osrframework/general.toml"));
    }

    #[test]
    fn test_disclaimer_has_version() {
        assert!(disclaimer("0.6.0").contains("OSRFConsole 0.6.0"));
    }
}
