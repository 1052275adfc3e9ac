use crate::error::CliError;
use sse::ServerSentEvent;

/// One compact JSON object per event, newline separated.
pub fn events_to_json_lines(events: &[ServerSentEvent]) -> Result<String, CliError> {
    let lines = events
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

pub fn print_events(events: &[ServerSentEvent]) -> Result<(), CliError> {
    let json = events_to_json_lines(events)?;
    if !json.is_empty() {
        println!("{json}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_to_json_lines() {
        let events = vec![
            ServerSentEvent::new("{\"a\":1}"),
            ServerSentEvent::new("line one\nline two"),
        ];

        assert_eq!(
            events_to_json_lines(&events).unwrap(),
            "{\"data\":\"{\\\"a\\\":1}\"}\n{\"data\":\"line one\\nline two\"}"
        );
        assert_eq!(events_to_json_lines(&[]).unwrap(), "");
    }
}
