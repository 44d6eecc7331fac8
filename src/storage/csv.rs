use std::io::{self, Write};

use crate::models::Record;

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if first {
            first = false;
        } else {
            w.write_all(b",")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\n")
}

/// Header line followed by one line per record.
pub fn write_records<W: Write, R: Record>(mut w: W, records: &[R]) -> io::Result<()> {
    write_row(&mut w, R::HEADERS)?;
    for record in records {
        write_row(&mut w, &record.row())?;
    }
    Ok(())
}

/// Encode records into an in-memory CSV buffer.
#[must_use]
pub fn encode<R: Record>(records: &[R]) -> Vec<u8> {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_records(&mut buf, records);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleRecord;

    fn schedule(nugget: &str) -> ScheduleRecord {
        ScheduleRecord {
            season_id: 2018,
            game_id: "0021800001".to_string(),
            season_stage_id: "2".to_string(),
            start_time_utc: "2018-10-17T00:00:00.000Z".to_string(),
            start_date_eastern: "20181016".to_string(),
            nugget: nugget.to_string(),
            h_team_id: "123".to_string(),
            v_team_id: "456".to_string(),
        }
    }

    #[test]
    fn test_write_row_quotes_special_fields() {
        let mut out = Vec::new();
        write_row(&mut out, &["plain", "a,b", "say \"hi\"", "two\nlines"]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_encode_writes_header_then_rows() {
        let csv = String::from_utf8(encode(&[schedule("Opener, at home")])).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("seasonId,gameId,seasonStageId,startTimeUTC,startDateEastern,nugget,hTeamId,vTeamId")
        );
        assert_eq!(
            lines.next(),
            Some("2018,0021800001,2,2018-10-17T00:00:00.000Z,20181016,\"Opener, at home\",123,456")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_encode_empty_still_has_header() {
        let csv = String::from_utf8(encode::<ScheduleRecord>(&[])).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
