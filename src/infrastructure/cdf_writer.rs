// CDF artifact writer
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::application::series_encoder::{EncodeError, SeriesEncoder};
use crate::domain::series::FacSeries;

/// CDF v3 magic numbers (uncompressed file).
const CDF_MAGIC: [u32; 2] = [0xCDF3_0001, 0x0000_FFFF];

/// Writes the FAC channel of a series as a single-variable CDF record dump:
/// the v3 magic, the collection id, then big-endian (epoch-millis, value)
/// pairs. Lives behind `SeriesEncoder` so the rest of the service never sees
/// the byte layout.
#[derive(Debug, Default, Clone)]
pub struct CdfWriter;

impl CdfWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesEncoder for CdfWriter {
    fn encode(&self, series: &FacSeries, path: &Path) -> Result<(), EncodeError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for magic in CDF_MAGIC {
            writer.write_all(&magic.to_be_bytes())?;
        }

        let name = series.collection.as_bytes();
        writer.write_all(&(name.len() as u32).to_be_bytes())?;
        writer.write_all(name)?;

        writer.write_all(&(series.points.len() as u64).to_be_bytes())?;
        for point in &series.points {
            writer.write_all(&point.time.timestamp_millis().to_be_bytes())?;
            writer.write_all(&point.value.to_be_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::FacPoint;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_encode_writes_magic_and_all_records() {
        let series = FacSeries::new(
            "SW_OPER_FACATMS_2F".to_string(),
            vec![
                FacPoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 1.25),
                FacPoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap(), -3.5),
            ],
        );

        let target = tempfile::NamedTempFile::new().unwrap();
        CdfWriter::new().encode(&series, target.path()).unwrap();

        let bytes = std::fs::read(target.path()).unwrap();
        assert_eq!(&bytes[0..4], &0xCDF3_0001u32.to_be_bytes());
        assert_eq!(&bytes[4..8], &0x0000_FFFFu32.to_be_bytes());

        // magic (8) + name length (4) + name + record count (8) + 16 per record
        let name_len = series.collection.len();
        assert_eq!(bytes.len(), 8 + 4 + name_len + 8 + 16 * 2);

        let count_start = 12 + name_len;
        let count = u64::from_be_bytes(bytes[count_start..count_start + 8].try_into().unwrap());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_encode_empty_series_still_produces_header() {
        let series = FacSeries::new("SW_FAST_FACBTMS_2F".to_string(), vec![]);
        let target = tempfile::NamedTempFile::new().unwrap();
        CdfWriter::new().encode(&series, target.path()).unwrap();

        let bytes = std::fs::read(target.path()).unwrap();
        assert_eq!(bytes.len(), 8 + 4 + series.collection.len() + 8);
    }
}
