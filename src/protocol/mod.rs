use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::model::{Catalog, Entry};
use crate::repository::MessageRepository;
use crate::services::message_storage::MessageStorage;
use crate::services::plural::PluralRuleProvider;

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn required_str<'a>(payload: &'a Value, field: &str) -> Result<&'a str, String> {
    payload
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| format!("payload.{field} is required"))
}

fn required<T: DeserializeOwned>(payload: &Value, field: &str) -> Result<T, String> {
    let v = payload
        .get(field)
        .cloned()
        .ok_or_else(|| format!("payload.{field} is required"))?;
    serde_json::from_value(v).map_err(|e| format!("invalid payload.{field}: {e}"))
}

fn scope(payload: &Value) -> Result<(&str, &str), String> {
    Ok((required_str(payload, "locale")?, required_str(payload, "domain")?))
}

pub fn handle<R, P>(storage: &MessageStorage<R, P>, input: &str) -> String
where
    R: MessageRepository,
    P: PluralRuleProvider,
{
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let payload = get_payload(&req);

    match dispatch(storage, Command::from(get_cmd(&req)), payload) {
        Ok(v) => ok(id, v),
        Err(e) => err(id, e),
    }
}

fn dispatch<R, P>(
    storage: &MessageStorage<R, P>,
    cmd: Command,
    payload: &Value,
) -> Result<Value, String>
where
    R: MessageRepository,
    P: PluralRuleProvider,
{
    match cmd {
        Command::Ping => Ok(json!({ "message": "catalog-core alive" })),

        Command::SaveCatalog => {
            let catalog: Catalog = required(payload, "catalog")?;
            storage.save_catalog(&catalog).map_err(|e| e.to_string())?;
            Ok(json!({ "saved": catalog.len() }))
        }

        Command::SaveEntry => {
            let (locale, domain) = scope(payload)?;
            let entry: Entry = required(payload, "entry")?;
            storage
                .save_single(locale, domain, &entry)
                .map_err(|e| e.to_string())?;
            Ok(json!({ "saved": 1 }))
        }

        Command::GetAll
        | Command::GetEnabled
        | Command::GetEnabledTranslated
        | Command::GetRequiresTranslating => {
            let (locale, domain) = scope(payload)?;
            let catalog = match cmd {
                Command::GetAll => storage.get_all(locale, domain),
                Command::GetEnabled => storage.get_all_enabled(locale, domain),
                Command::GetEnabledTranslated => storage.get_enabled_translated(locale, domain),
                _ => storage.get_requires_translating(locale, domain),
            }
            .map_err(|e| e.to_string())?;
            Ok(json!({ "catalog": catalog }))
        }

        Command::DisableDomain => {
            let (locale, domain) = scope(payload)?;
            storage
                .disable_all_in_domain(locale, domain)
                .map_err(|e| e.to_string())?;
            Ok(json!({ "disabled": true }))
        }

        Command::PluralCount => {
            let locale = required_str(payload, "locale")?;
            let count = storage.get_plural_count(locale).map_err(|e| e.to_string())?;
            Ok(json!({ "locale": locale, "plural_count": count }))
        }

        Command::Unknown => Err("unknown command".into()),
    }
}
