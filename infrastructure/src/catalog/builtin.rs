//! Built-in service catalog
//!
//! The default data shown when no catalog file is configured. Records are
//! listed in display order.

use async_trait::async_trait;
use folio_application::{CatalogSourceError, CatalogSourcePort};
use folio_domain::{Catalog, ContactInfo, ServiceIcon, ServiceRecord};

/// The default catalog content, defined in code
pub struct BuiltinCatalog;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn services() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord {
            id: "sheets-automation".into(),
            icon: ServiceIcon::Spreadsheet,
            title: "Spreadsheet automation".to_string(),
            short: "Scripts that turn manual spreadsheet routines into one-click jobs".to_string(),
            price: "from $120".to_string(),
            delivery: "2-4 days".to_string(),
            support: "14 days of fixes after delivery".to_string(),
            highlights: strings(&["Intake forms", "Scheduled reports", "Zero copy-paste"]),
            includes: strings(&[
                "Audit of the current sheet and process",
                "Automation script with an on-sheet menu",
                "Error notifications to your chat",
                "Short usage guide",
            ]),
            good_for: strings(&[
                "Teams drowning in weekly report assembly",
                "Anyone re-typing data between sheets",
            ]),
            stack: strings(&["Google Sheets", "Apps Script", "Telegram API"]),
        },
        ServiceRecord {
            id: "telegram-bot".into(),
            icon: ServiceIcon::Bot,
            title: "Telegram bots".to_string(),
            short: "Bots for intake, broadcasts, payments, and support flows".to_string(),
            price: "from $180".to_string(),
            delivery: "3-6 days".to_string(),
            support: "14 days of fixes after delivery".to_string(),
            highlights: strings(&["Lead intake", "Broadcasts", "Admin commands"]),
            includes: strings(&[
                "Dialogue flow designed with you",
                "Deployment and hosting setup",
                "Admin panel commands",
                "Message log export",
            ]),
            good_for: strings(&[
                "Channels that answer the same questions daily",
                "Small shops taking orders in chat",
            ]),
            stack: strings(&["Telegram Bot API", "Webhooks", "SQLite"]),
        },
        ServiceRecord {
            id: "ai-integration".into(),
            icon: ServiceIcon::Brain,
            title: "AI integrations".to_string(),
            short: "LLM answering, tagging, and drafting wired into your tools".to_string(),
            price: "from $200".to_string(),
            delivery: "4-7 days".to_string(),
            support: "14 days of fixes after delivery".to_string(),
            highlights: strings(&["Auto-replies", "Classification", "Summaries"]),
            includes: strings(&[
                "Prompt and model selection for the task",
                "Integration with your chat or CRM",
                "Cost guardrails and usage report",
                "Fallback path when the model is down",
            ]),
            good_for: strings(&[
                "Support inboxes with repetitive tickets",
                "Content teams needing first drafts",
            ]),
            stack: strings(&["LLM APIs", "Webhooks", "Vector search"]),
        },
        ServiceRecord {
            id: "parsing".into(),
            icon: ServiceIcon::Workflow,
            title: "Parsers & data collection".to_string(),
            short: "Scheduled collectors that pull sites and APIs into clean tables".to_string(),
            price: "from $150".to_string(),
            delivery: "3-5 days".to_string(),
            support: "14 days of fixes after delivery".to_string(),
            highlights: strings(&["Price monitoring", "Competitor feeds", "Dedup"]),
            includes: strings(&[
                "Source analysis and legality check",
                "Collector with retry and rate limits",
                "Normalized output table",
                "Schedule and failure alerts",
            ]),
            good_for: strings(&[
                "Price and stock monitoring",
                "Market research snapshots",
            ]),
            stack: strings(&["HTTP APIs", "Headless browser", "Cron"]),
        },
        ServiceRecord {
            id: "dashboards".into(),
            icon: ServiceIcon::Report,
            title: "Reports & dashboards".to_string(),
            short: "Live dashboards that replace the Friday report scramble".to_string(),
            price: "from $140".to_string(),
            delivery: "2-5 days".to_string(),
            support: "14 days of fixes after delivery".to_string(),
            highlights: strings(&["Live KPIs", "Auto-refresh", "Shareable"]),
            includes: strings(&[
                "Metric definitions agreed with you",
                "Data pipeline from your sources",
                "Dashboard with filters",
                "Scheduled snapshot to chat or email",
            ]),
            good_for: strings(&[
                "Founders tracking weekly numbers",
                "Agencies reporting to clients",
            ]),
            stack: strings(&["Google Sheets", "Looker Studio", "Apps Script"]),
        },
        ServiceRecord {
            id: "admin-tools".into(),
            icon: ServiceIcon::Shield,
            title: "Mini admin panels".to_string(),
            short: "Small internal tools so the team stops editing production data by hand".to_string(),
            price: "from $220".to_string(),
            delivery: "5-8 days".to_string(),
            support: "14 days of fixes after delivery".to_string(),
            highlights: strings(&["Role access", "Audit log", "Safe edits"]),
            includes: strings(&[
                "CRUD screens for your records",
                "Role-based access",
                "Change history",
                "Deployment on your hosting",
            ]),
            good_for: strings(&[
                "Ops teams managing orders or users",
                "Replacing 'ask the developer to edit the DB'",
            ]),
            stack: strings(&["Web stack", "SQLite/Postgres", "Docker"]),
        },
    ]
}

fn contact() -> ContactInfo {
    ContactInfo::new("@folio_dev", "hello@foliodev.io")
}

#[async_trait]
impl CatalogSourcePort for BuiltinCatalog {
    async fn load(&self) -> Result<Catalog, CatalogSourceError> {
        Ok(Catalog::new(services(), contact())?)
    }
}
