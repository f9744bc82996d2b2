//! Server-rendered dashboard: upload form plus the log cards.

use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::app_state::AppState;
use crate::errors::AppError;
use crate::view::card::LogCard;
use crate::view::container::CardContainer;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>VCDS Log Visualizer</title>
</head>
<body>
    <form id="upload-form" method="post" action="/api/logs/upload/" enctype="multipart/form-data">
        <input type="file" id="logfile" name="file" accept=".csv">
        <button class="btn" type="submit">Upload</button>
    </form>
    <div id="log-cards-container">
{cards}
    </div>
    <script>
        const form = document.getElementById("upload-form");
        const container = document.getElementById("log-cards-container");

        form.addEventListener("submit", async (event) => {
            event.preventDefault();
            const file = document.getElementById("logfile").files[0];
            if (!file) {
                alert("Please select a file to upload.");
                return;
            }

            const body = new FormData();
            body.append("file", file);
            try {
                const res = await fetch("/api/logs/upload/", { method: "POST", body });
                if (!res.ok) {
                    throw new Error(`upload failed with status ${res.status}`);
                }
                await res.json();
            } catch (err) {
                console.error("Error uploading file:", err);
                alert("Error uploading file.");
                return;
            }
            alert("File uploaded successfully!");
            await refreshCards();
        });

        async function refreshCards() {
            try {
                const res = await fetch("/", { headers: { Accept: "text/html" } });
                if (!res.ok) {
                    throw new Error(`listing failed with status ${res.status}`);
                }
                const page = new DOMParser().parseFromString(await res.text(), "text/html");
                container.innerHTML = page.getElementById("log-cards-container").innerHTML;
            } catch (err) {
                console.error("Error fetching logs:", err);
            }
        }

        container.addEventListener("click", (event) => {
            const button = event.target.closest(".btn[data-log-id]");
            if (button) {
                alert(`Visualizing log with ID: ${button.dataset.logId}`);
            }
        });
    </script>
</body>
</html>
"#;

pub struct DashboardController;

impl DashboardController {
    pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
        let records = state.log_service.all_log_records().await?;
        let mut container = CardContainer::new();
        container.replace_with(records.iter().map(|r| LogCard::from_record(r, &Local)));

        Ok(Html(render_page(&container)))
    }
}

pub fn render_page(container: &CardContainer) -> String {
    PAGE_TEMPLATE.replace("{cards}", &container.to_html())
}
