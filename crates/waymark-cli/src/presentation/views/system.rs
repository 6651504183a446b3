use std::fmt;

use crate::presentation::view_models::{
    ConfigStatus, GuidanceViewModel, InitResultViewModel, UploadResultViewModel,
};

impl fmt::Display for UploadResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[{}] {}", self.finished_at, self.message)?;
        writeln!(f, "Endpoint:  {}", self.url)?;
        writeln!(f, "Waypoints: {}", self.waypoints)?;
        Ok(())
    }
}

impl fmt::Display for InitResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.config_status {
            ConfigStatus::Created { config_path } => {
                writeln!(f, "Wrote default configuration to {}", config_path)?
            }
            ConfigStatus::Overwritten { config_path } => {
                writeln!(f, "Reset configuration at {}", config_path)?
            }
            ConfigStatus::LoadedExisting { config_path } => {
                writeln!(f, "Configuration already present at {}", config_path)?
            }
        }
        writeln!(f, "Data directory: {}", self.data_dir)?;
        writeln!(f, "Upload endpoint: {}", self.endpoint)?;
        Ok(())
    }
}

impl fmt::Display for GuidanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "waymark - waypoint mission editor")?;
        writeln!(f)?;
        if !self.config_exists {
            writeln!(f, "Get started:")?;
            writeln!(f, "  waymark init                # Write config.toml to {}", self.data_dir)?;
            writeln!(f)?;
        }
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  waymark edit                # Open the map editor")?;
        writeln!(f, "  waymark edit points.json    # Continue an exported mission")?;
        writeln!(f, "  waymark show points.json    # Print the waypoint table")?;
        writeln!(f, "  waymark plan points.json    # Preview the flown mission")?;
        writeln!(f, "  waymark upload points.json  # Send it to the vehicle service")?;
        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  waymark --help")?;
        Ok(())
    }
}
