use std::fmt;

use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Html,
    Csv,
    Json,
    Pdf,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Download link for a rendered report. No network call.
pub fn report_url(api_base: &str, project_id: &str, format: ReportFormat) -> String {
    format!(
        "{}/api/reports/{}?format={}",
        api_base.trim_end_matches('/'),
        project_id,
        format
    )
}

impl ApiClient {
    pub fn report_url(&self, project_id: &str, format: ReportFormat) -> String {
        report_url(&self.config.api_base, project_id, format)
    }

    pub fn download_report(&self, project_id: &str, format: ReportFormat) -> ApiResult<Vec<u8>> {
        let endpoint = "download report";
        let resp = self.send(self.client.get(self.report_url(project_id, format)), endpoint)?;
        let bytes = resp.bytes().map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "../tests/remote/reports_tests.rs"]
mod tests;
