use tracing::{debug, info, warn};
use validator::Validate;

use crate::api::dto::log_dto::{MessageResponse, PaginationQuery, UploadReceipt};
use crate::core::persistence::logs::log_entity::{LogEntity, NewGroup, NewLog};
use crate::core::persistence::logs::log_repository_trait::LogRepository;
use crate::domain::log::model::{LogGroup, LogRecord};
use crate::domain::log::vcds_parser;
use crate::errors::{internal_error, AppError};

/// Upload, listing and cleanup of VCDS logs on top of a [`LogRepository`].
pub struct LogService<R: LogRepository> {
    repo: R,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn upload_csv(&self, file_name: &str, bytes: &[u8]) -> Result<UploadReceipt, AppError> {
        if !file_name.to_lowercase().ends_with(".csv") {
            warn!(file_name, "Rejected upload with non-csv file name");
            return Err(AppError::InvalidFileFormat);
        }

        let parsed = vcds_parser::parse_csv(bytes)
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;

        let log = self
            .repo
            .insert_log(NewLog {
                name: file_name.to_string(),
                description: format!(
                    "Log for VIN {} with motor type {}",
                    parsed.vin, parsed.motor_type
                ),
                created_at: parsed.created_at,
                vin: Some(parsed.vin.clone()),
                motor_type: Some(parsed.motor_type.clone()),
            })
            .await
            .map_err(internal_error)?;

        let groups: Vec<NewGroup> = parsed
            .groups
            .into_iter()
            .map(|g| NewGroup {
                group_name: g.name,
                sensors: g.values,
            })
            .collect();
        let stored = self
            .repo
            .insert_groups(log.id, groups)
            .await
            .map_err(internal_error)?;

        info!(
            log_id = log.id,
            vin = %parsed.vin,
            groups = stored.len(),
            "Stored uploaded VCDS log"
        );

        Ok(UploadReceipt {
            message: "CSV uploaded and parsed successfully".to_string(),
            log_id: log.id,
            created_at: parsed.created_at,
            vin: parsed.vin,
            motor_type: parsed.motor_type,
        })
    }

    pub async fn list_logs(&self, query: PaginationQuery) -> Result<Vec<LogEntity>, AppError> {
        query
            .validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        debug!(limit = query.limit(), offset = query.offset(), "Listing logs");
        self.repo
            .list_logs(Some(query.limit()), query.offset())
            .await
            .map_err(internal_error)
    }

    /// Every stored log, as the list view consumes it.
    pub async fn all_log_records(&self) -> Result<Vec<LogRecord>, AppError> {
        let logs = self.repo.list_logs(None, 0).await.map_err(internal_error)?;
        Ok(logs.iter().map(LogRecord::from).collect())
    }

    pub async fn get_log(&self, log_id: i64) -> Result<LogEntity, AppError> {
        self.repo
            .get_log(log_id)
            .await
            .map_err(internal_error)?
            .ok_or_else(|| AppError::NotFound("Log not found".to_string()))
    }

    pub async fn groups_for_log(&self, log_id: i64) -> Result<Vec<LogGroup>, AppError> {
        let groups = self
            .repo
            .groups_for_log(log_id)
            .await
            .map_err(internal_error)?;
        if groups.is_empty() {
            return Err(AppError::NotFound("Groups not found".to_string()));
        }
        Ok(groups)
    }

    pub async fn list_groups(&self, query: PaginationQuery) -> Result<Vec<LogGroup>, AppError> {
        query
            .validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.repo
            .list_groups(Some(query.limit()), query.offset())
            .await
            .map_err(internal_error)
    }

    pub async fn delete_all(&self) -> Result<MessageResponse, AppError> {
        let removed = self.repo.delete_all().await.map_err(internal_error)?;
        info!(removed, "Deleted all logs");
        Ok(MessageResponse {
            message: "All logs deleted successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::logs::log_repository::InMemoryLogRepository;
    use crate::domain::log::vcds_parser::tests::SAMPLE;

    fn service() -> LogService<InMemoryLogRepository> {
        LogService::new(InMemoryLogRepository::new())
    }

    #[tokio::test]
    async fn upload_stores_log_and_groups() {
        let svc = service();
        let receipt = svc
            .upload_csv("drive.CSV", SAMPLE.as_bytes())
            .await
            .expect("upload should succeed");

        assert_eq!(receipt.log_id, 1);
        assert_eq!(receipt.vin, "WVWZZZ1KZAW000001");

        let log = svc.get_log(1).await.unwrap();
        assert_eq!(log.name, "drive.CSV");
        assert_eq!(
            log.description,
            "Log for VIN WVWZZZ1KZAW000001 with motor type CAYC 1.6l TDI"
        );

        let groups = svc.groups_for_log(1).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group_name, "Group A");
    }

    #[tokio::test]
    async fn rejects_non_csv_names() {
        let err = service()
            .upload_csv("drive.txt", SAMPLE.as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidFileFormat));
    }

    #[tokio::test]
    async fn unparseable_csv_is_a_bad_request() {
        let err = service()
            .upload_csv("broken.csv", b"nothing here")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BodyParsingError(_)));
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let svc = service();
        assert!(matches!(svc.get_log(7).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.groups_for_log(7).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_defaults_to_ten_and_rejects_zero_limit() {
        let svc = service();
        for i in 0..12 {
            svc.upload_csv(&format!("log{i}.csv"), SAMPLE.as_bytes())
                .await
                .unwrap();
        }

        let first = svc.list_logs(PaginationQuery::default()).await.unwrap();
        assert_eq!(first.len(), 10);

        let rest = svc
            .list_logs(PaginationQuery { limit: None, offset: Some(10) })
            .await
            .unwrap();
        assert_eq!(rest.len(), 2);

        let err = svc
            .list_logs(PaginationQuery { limit: Some(0), offset: None })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BodyParsingError(_)));
    }

    #[tokio::test]
    async fn delete_all_empties_the_store() {
        let svc = service();
        svc.upload_csv("a.csv", SAMPLE.as_bytes()).await.unwrap();

        let res = svc.delete_all().await.unwrap();
        assert_eq!(res.message, "All logs deleted successfully");
        assert!(svc.all_log_records().await.unwrap().is_empty());
        assert!(svc.list_groups(PaginationQuery::default()).await.unwrap().is_empty());
    }
}
