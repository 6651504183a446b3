use chrono::Local;
use std::path::Path;
use waymark_runtime::{UploadOutcome, UploadReport};

use crate::presentation::view_models::{
    ConfigStatus, GuidanceViewModel, InitResultViewModel, UploadResultViewModel,
};

pub fn present_upload_report(report: &UploadReport) -> UploadResultViewModel {
    let status_code = match &report.outcome {
        UploadOutcome::Rejected { code } => Some(*code),
        _ => None,
    };

    UploadResultViewModel {
        url: report.url.clone(),
        waypoints: report.waypoints,
        success: report.outcome.is_success(),
        status_code,
        message: report.outcome.message(),
        finished_at: report
            .finished_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string(),
    }
}

pub fn present_init_result(
    status: waymark_runtime::ConfigStatus,
    data_dir: &Path,
    endpoint: String,
) -> InitResultViewModel {
    let config_status = match status {
        waymark_runtime::ConfigStatus::Created { config_path } => ConfigStatus::Created {
            config_path: config_path.display().to_string(),
        },
        waymark_runtime::ConfigStatus::Overwritten { config_path } => ConfigStatus::Overwritten {
            config_path: config_path.display().to_string(),
        },
        waymark_runtime::ConfigStatus::LoadedExisting { config_path } => {
            ConfigStatus::LoadedExisting {
                config_path: config_path.display().to_string(),
            }
        }
    };

    InitResultViewModel {
        config_status,
        data_dir: data_dir.display().to_string(),
        endpoint,
    }
}

pub fn present_guidance(data_dir: &Path, config_exists: bool) -> GuidanceViewModel {
    GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        config_exists,
    }
}
