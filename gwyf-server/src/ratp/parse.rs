//! Scraping trains out of the upstream HTML.

use regex::Regex;

use crate::domain::Train;

/// Pattern matching one upcoming train on the WAP page.
///
/// Capture groups, in order: destination, mission code, stop message.
/// `.` does not cross newlines, so one block never spills into the next line.
pub const SCHEDULE_PATTERN: &str =
    r#"&gt;&nbsp;([^<]+)</div>.*>([0-9A-Za-z_]+)</a>.*<div class="schmsg."><b>([^<]+)</b>"#;

/// Compiled schedule pattern, built once at startup and shared across requests.
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    pattern: Regex,
}

impl ScheduleParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(SCHEDULE_PATTERN)?,
        })
    }

    /// Extract every train from `body`, in document order.
    ///
    /// A body with no match is not an error and yields an empty list.
    pub fn parse(&self, body: &str) -> Vec<Train> {
        self.pattern
            .captures_iter(body)
            .map(|caps| Train {
                destination: caps[1].to_string(),
                mission: caps[2].to_string(),
                stop: caps[3].to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(destination: &str, mission: &str, stop: &str) -> String {
        format!(
            r#"<div class="bg1">&gt;&nbsp;{destination}</div><div><a href="/siv/mission?m={mission}">{mission}</a></div><div class="schmsg1"><b>{stop}</b></div>"#
        )
    }

    #[test]
    fn pattern_compiles() {
        assert!(ScheduleParser::new().is_ok());
    }

    #[test]
    fn single_block() {
        let parser = ScheduleParser::new().unwrap();
        let body = format!("<html><body>\n{}\n</body></html>", block("La Défense", "RERA", "2 mn"));

        let trains = parser.parse(&body);
        assert_eq!(
            trains,
            vec![Train {
                destination: "La Défense".into(),
                mission: "RERA".into(),
                stop: "2 mn".into(),
            }]
        );
    }

    #[test]
    fn blocks_keep_document_order() {
        let parser = ScheduleParser::new().unwrap();
        let body = [
            block("Saint-Germain-en-Laye", "QIKY", "A l'approche"),
            block("Cergy-le-Haut", "NELY", "4 mn"),
            block("Saint-Germain-en-Laye", "QIKY", "9 mn"),
        ]
        .join("\n");

        let trains = parser.parse(&body);
        let missions: Vec<_> = trains.iter().map(|t| t.mission.as_str()).collect();
        let stops: Vec<_> = trains.iter().map(|t| t.stop.as_str()).collect();
        assert_eq!(missions, ["QIKY", "NELY", "QIKY"]);
        assert_eq!(stops, ["A l'approche", "4 mn", "9 mn"]);
    }

    #[test]
    fn any_schmsg_variant_matches() {
        let parser = ScheduleParser::new().unwrap();
        let body = r#"&gt;&nbsp;Boissy</div>>ZEUS</a><div class="schmsg3"><b>Sans arrêt</b>"#;

        let trains = parser.parse(body);
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].destination, "Boissy");
        assert_eq!(trains[0].stop, "Sans arrêt");
    }

    #[test]
    fn no_match_yields_empty() {
        let parser = ScheduleParser::new().unwrap();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("<html><body>Service momentanément indisponible</body></html>").is_empty());
    }

    #[test]
    fn extracted_text_is_not_validated() {
        let parser = ScheduleParser::new().unwrap();
        let trains = parser.parse(&block("???", "X_1", "&nbsp;"));
        assert_eq!(trains[0].destination, "???");
        assert_eq!(trains[0].mission, "X_1");
        assert_eq!(trains[0].stop, "&nbsp;");
    }
}
