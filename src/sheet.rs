//! Sample sheets: the per-flowcell CSV that assigns samples and index
//! sequences to lanes, and the checks run on it before it is handed on to
//! demultiplexing.
//!
//! ### Layout
//! One header row, then one row per sample and lane with the columns in
//! [`HEADER`]. `Lane` is an integer; all other columns are free text.
//!
//! ### Checks
//! Each record collects zero or more [`RecordWarning`]s. A sheet with any
//! warning [`has problems`](SheetReport::has_problems).
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use rayon::prelude::*;
use tracing::debug;

use crate::catalog::ExpandedLookup;
use crate::config::SheetOptions;
use crate::error::{Error, Result};
use crate::lane::{check_lane, Conflict, ConflictReason};

pub const HEADER: [&str; 9] = [
    "FCID", "Lane", "SampleID", "SampleRef", "Index", "Description", "Control", "Recipe", "Operator",
];

/// Bases a sheet index may contain.
const SHEET_BASES: &[u8] = b"ACGT";

/// One sample in one lane.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SheetRecord {
    pub fcid: String,
    pub lane: u32,
    pub sample_id: String,
    pub sample_ref: String,
    pub index: String,
    pub description: String,
    pub control: String,
    pub recipe: String,
    pub operator: String,
}

impl SheetRecord {
    fn from_csv(rec: &StringRecord, line: u64) -> Result<Self> {
        if rec.len() < HEADER.len() {
            return Err(Error::malformed_record(line, Some(format!("expected {} fields, found {}", HEADER.len(), rec.len()))));
        }
        let lane = rec[1]
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::malformed_record(line, Some(format!("lane '{}': {e}", &rec[1]))))?;
        Ok(SheetRecord {
            fcid: rec[0].to_string(),
            lane,
            sample_id: rec[2].to_string(),
            sample_ref: rec[3].to_string(),
            index: rec[4].to_string(),
            description: rec[5].to_string(),
            control: rec[6].to_string(),
            recipe: rec[7].to_string(),
            operator: rec[8].to_string(),
        })
    }

    fn to_csv(&self) -> [String; 9] {
        [
            self.fcid.clone(),
            self.lane.to_string(),
            self.sample_id.clone(),
            self.sample_ref.clone(),
            self.index.clone(),
            self.description.clone(),
            self.control.clone(),
            self.recipe.clone(),
            self.operator.clone(),
        ]
    }
}

/// Check a flowcell id: exactly 9 alphanumeric characters. Returns it upper-cased.
pub fn validate_fcid(fcid: &str) -> Result<String> {
    if fcid.chars().count() != 9 {
        return Err(Error::InvalidFlowcellId { fcid: fcid.to_string(), reason: "must contain 9 characters" });
    }
    if !fcid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidFlowcellId { fcid: fcid.to_string(), reason: "must contain only alphanumerical characters" });
    }
    Ok(fcid.to_ascii_uppercase())
}

/// Derive an index sequence from a sample id such as `"P123_index7"` or `"liver r12"`.
///
/// The last whitespace separated word is looked up first, then the last
/// underscore separated part. With `append_a` an `A` is appended to a hit.
pub fn interpret_sample_id(sample_id: &str, lookup: &ExpandedLookup, append_a: bool) -> Option<String> {
    let by_space = sample_id.split_whitespace().last();
    let by_underscore = sample_id.rsplit('_').next();
    let seq = by_space
        .and_then(|w| lookup.get(w))
        .or_else(|| by_underscore.and_then(|w| lookup.get(w)))?;
    let mut seq = seq.to_string();
    if append_a {
        seq.push('A');
    }
    Some(seq)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordWarning {
    InvalidNucleotide,
    UnequalLength,
    DuplicateInLane,
    SampleIdMismatch,
    MissingSequence,
    TooSimilar { other: String, reason: ConflictReason },
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordWarning::InvalidNucleotide => write!(f, "Invalid nucleotide sequence!"),
            RecordWarning::UnequalLength => write!(f, "Unequal length of sequence index for lane!"),
            RecordWarning::DuplicateInLane => write!(f, "Sequence index already used in lane!"),
            RecordWarning::SampleIdMismatch => write!(f, "SampleID and Index sequence inconsistent!"),
            RecordWarning::MissingSequence => write!(f, "Missing sequence!"),
            RecordWarning::TooSimilar { other, reason } => write!(f, "Sequence index too close to {other} ({reason})!"),
        }
    }
}

/// Outcome of [`SampleSheet::validate`].
#[derive(Clone, Debug, Default)]
pub struct SheetReport {
    /// One entry per record, in sheet order.
    pub warnings: Vec<Vec<RecordWarning>>,
    /// Lane number → conflicting index pairs.
    pub conflicts: BTreeMap<u32, Vec<Conflict>>,
}

impl SheetReport {
    /// 1-based numbers of records with at least one warning.
    pub fn problems(&self) -> Vec<usize> {
        self.warnings.iter().enumerate().filter(|(_, w)| !w.is_empty()).map(|(i, _)| i + 1).collect()
    }

    pub fn has_problems(&self) -> bool { self.warnings.iter().any(|w| !w.is_empty()) }
}

#[derive(Clone, Debug, Default)]
pub struct SampleSheet {
    pub fcid: String,
    pub records: Vec<SheetRecord>,
}

impl SampleSheet {
    /// An empty sheet for a validated flowcell id.
    pub fn new(fcid: &str) -> Result<Self> {
        Ok(SampleSheet { fcid: validate_fcid(fcid)?, records: Vec::new() })
    }

    /// Read a sheet; blank rows are skipped.
    pub fn from_reader<R: Read>(fcid: &str, reader: R) -> Result<Self> {
        let mut sheet = SampleSheet::new(fcid)?;
        let mut rdr = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
        for result in rdr.records() {
            let rec = result?;
            if rec.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            sheet.records.push(SheetRecord::from_csv(&rec, line)?);
        }
        debug!(fcid = sheet.fcid.as_str(), records = sheet.records.len(), "sample sheet read");
        Ok(sheet)
    }

    /// Read `<FCID>.csv`; the flowcell id is taken from the file stem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let file = std::fs::File::open(p)?;
        SampleSheet::from_reader(stem, file)
    }

    /// Write header and records, quoting every non-numeric field.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut w = WriterBuilder::new().quote_style(QuoteStyle::NonNumeric).from_writer(writer);
        w.write_record(HEADER)?;
        for r in &self.records {
            w.write_record(r.to_csv())?;
        }
        w.flush()?;
        Ok(())
    }

    /// Order records by lane, then sample id.
    pub fn sort(&mut self) {
        self.records.sort_by(|a, b| (a.lane, &a.sample_id).cmp(&(b.lane, &b.sample_id)));
    }

    /// Fill empty index fields from the sample id. Returns how many were filled.
    pub fn fill_indexes(&mut self, lookup: &ExpandedLookup, append_a: bool) -> usize {
        let mut filled = 0;
        for r in self.records.iter_mut().filter(|r| r.index.is_empty()) {
            if let Some(seq) = interpret_sample_id(&r.sample_id, lookup, append_a) {
                r.index = seq;
                filled += 1;
            }
        }
        filled
    }

    /// Run every record and lane check.
    pub fn validate(&self, opts: &SheetOptions, lookup: &ExpandedLookup) -> SheetReport {
        let mut warnings: Vec<Vec<RecordWarning>> = Vec::with_capacity(self.records.len());
        let mut lane_len: HashMap<u32, usize> = HashMap::new();
        let mut lane_seen: HashMap<u32, HashSet<&str>> = HashMap::new();
        let mut lane_indexes: BTreeMap<u32, Vec<String>> = BTreeMap::new();

        for r in &self.records {
            let mut w = Vec::new();
            if r.index.is_empty() {
                w.push(RecordWarning::MissingSequence);
                warnings.push(w);
                continue;
            }
            if !r.index.bytes().all(|b| SHEET_BASES.contains(&b.to_ascii_uppercase())) {
                w.push(RecordWarning::InvalidNucleotide);
            }
            if *lane_len.entry(r.lane).or_insert(r.index.len()) != r.index.len() {
                w.push(RecordWarning::UnequalLength);
            }
            if !lane_seen.entry(r.lane).or_default().insert(r.index.as_str()) {
                w.push(RecordWarning::DuplicateInLane);
            }
            if interpret_sample_id(&r.sample_id, lookup, opts.append_a).as_deref() != Some(r.index.as_str()) {
                w.push(RecordWarning::SampleIdMismatch);
            }
            lane_indexes.entry(r.lane).or_default().push(r.index.to_ascii_uppercase());
            warnings.push(w);
        }

        let t = opts.thresholds;
        let conflicts: BTreeMap<u32, Vec<Conflict>> = lane_indexes
            .into_par_iter()
            .map(|(lane, seqs)| (lane, check_lane(&seqs, t.min_hamming, t.min_levenshtein)))
            .filter(|(_, c)| !c.is_empty())
            .collect();

        for (r, w) in self.records.iter().zip(warnings.iter_mut()) {
            let Some(lane_conflicts) = conflicts.get(&r.lane) else { continue };
            let index = r.index.to_ascii_uppercase();
            for c in lane_conflicts {
                let other = if c.a == index { &c.b } else if c.b == index { &c.a } else { continue };
                w.push(RecordWarning::TooSimilar { other: other.clone(), reason: c.reason });
            }
        }
        debug!(records = self.records.len(), lanes_with_conflicts = conflicts.len(), "sample sheet validated");
        SheetReport { warnings, conflicts }
    }
}

#[cfg(test)]
mod sheet_tests {
    use super::*;
    use crate::catalog::lookup;

    const SHEET: &str = "\
FCID,Lane,SampleID,SampleRef,Index,Description,Control,Recipe,Operator
\"C0ABCACXX\",2,\"P1_101 index1\",\"hg19\",\"ATCACG\",\"\",\"N\",\"R1\",\"NN\"
\"C0ABCACXX\",1,\"P1_102_i7\",\"hg19\",\"CAGATC\",\"\",\"N\",\"R1\",\"NN\"

\"C0ABCACXX\",1,\"P1_103_rpi3\",\"hg19\",\"TTAGGC\",\"\",\"N\",\"R1\",\"NN\"
";

    #[test]
    fn flowcell_ids_are_checked_and_upper_cased() {
        assert_eq!(validate_fcid("c0abcacxx").unwrap(), "C0ABCACXX");
        assert!(matches!(validate_fcid("C0ABC"), Err(Error::InvalidFlowcellId { .. })));
        assert!(matches!(validate_fcid("C0ABC-CXX"), Err(Error::InvalidFlowcellId { .. })));
    }

    #[test]
    fn sample_ids_resolve_by_last_word_or_underscore_part() {
        let l = lookup().unwrap();
        assert_eq!(interpret_sample_id("liver index7", l, false).as_deref(), Some("CAGATC"));
        assert_eq!(interpret_sample_id("P1_102_I7", l, false).as_deref(), Some("CAGATC"));
        assert_eq!(interpret_sample_id("P1_102_ht1", l, true).as_deref(), Some("AACGTGATA"));
        assert_eq!(interpret_sample_id("P1_102_unknown", l, false), None);
        assert_eq!(interpret_sample_id("", l, false), None);
    }

    #[test]
    fn read_sort_and_write() {
        let mut sheet = SampleSheet::from_reader("C0ABCACXX", SHEET.as_bytes()).unwrap();
        assert_eq!(sheet.records.len(), 3);
        sheet.sort();
        let lanes: Vec<(u32, &str)> = sheet.records.iter().map(|r| (r.lane, r.sample_id.as_str())).collect();
        assert_eq!(lanes, vec![(1, "P1_102_i7"), (1, "P1_103_rpi3"), (2, "P1_101 index1")]);

        let mut out = Vec::new();
        sheet.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\"FCID\",\"Lane\",\"SampleID\""));
        assert!(text.contains("\"C0ABCACXX\",1,\"P1_102_i7\""));
        let again = SampleSheet::from_reader("C0ABCACXX", text.as_bytes()).unwrap();
        assert_eq!(again.records, sheet.records);
    }

    #[test]
    fn flowcell_id_comes_from_the_file_stem() {
        let dir = std::env::temp_dir().join(format!("idxsheet-sheet-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("c0abcacxx.csv");
        std::fs::write(&good, SHEET).unwrap();
        let sheet = SampleSheet::from_path(&good).unwrap();
        assert_eq!(sheet.fcid, "C0ABCACXX");
        assert_eq!(sheet.records.len(), 3);

        let bad = dir.join("samples-2024.csv");
        std::fs::write(&bad, SHEET).unwrap();
        let err = SampleSheet::from_path(&bad).unwrap_err();
        assert!(matches!(err, Error::InvalidFlowcellId { ref fcid, .. } if fcid == "samples-2024"));

        assert!(matches!(SampleSheet::from_path(dir.join("C0MISSING.csv")), Err(Error::Io(_))));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn non_integer_lane_is_malformed() {
        let bad = "FCID,Lane,SampleID,SampleRef,Index,Description,Control,Recipe,Operator\nX,one,s,r,ACGTAC,,N,R1,NN\n";
        let err = SampleSheet::from_reader("C0ABCACXX", bad.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn consistent_sheet_has_no_problems() {
        let sheet = SampleSheet::from_reader("C0ABCACXX", SHEET.as_bytes()).unwrap();
        let report = sheet.validate(&SheetOptions::default(), lookup().unwrap());
        assert!(!report.has_problems(), "{:?}", report.warnings);
        assert!(report.conflicts.is_empty());
    }

    fn record(lane: u32, sample_id: &str, index: &str) -> SheetRecord {
        SheetRecord { fcid: "C0ABCACXX".into(), lane, sample_id: sample_id.into(), index: index.into(), ..Default::default() }
    }

    #[test]
    fn record_checks_flag_each_problem() {
        let mut sheet = SampleSheet::new("C0ABCACXX").unwrap();
        sheet.records = vec![
            record(1, "s_index1", "ATCACG"),
            record(1, "s_index2", "ATCATG"),
            record(1, "s_index1", "ATCACG"),
            record(1, "s_index3", "TTAGGCA"),
            record(2, "s_index4", ""),
            record(2, "s_index5", "ACAGTX"),
        ];
        let report = sheet.validate(&SheetOptions::default(), lookup().unwrap());
        let w = &report.warnings;
        assert!(w[1].contains(&RecordWarning::SampleIdMismatch));
        assert!(w[1].iter().any(|x| matches!(x, RecordWarning::TooSimilar { reason: ConflictReason::LevenshteinTooClose { .. }, .. })));
        assert!(w[2].contains(&RecordWarning::DuplicateInLane));
        assert!(w[3].contains(&RecordWarning::UnequalLength));
        assert_eq!(w[4], vec![RecordWarning::MissingSequence]);
        assert!(w[5].contains(&RecordWarning::InvalidNucleotide));
        assert_eq!(report.problems(), vec![1, 2, 3, 4, 5, 6]);
        assert!(report.conflicts.contains_key(&1));
    }

    #[test]
    fn append_a_changes_what_sample_ids_should_match() {
        let mut sheet = SampleSheet::new("C0ABCACXX").unwrap();
        sheet.records = vec![record(1, "s_index1", "ATCACGA")];
        let opts = SheetOptions { append_a: true, ..Default::default() };
        assert!(!sheet.validate(&opts, lookup().unwrap()).has_problems());
        assert!(sheet.validate(&SheetOptions::default(), lookup().unwrap()).has_problems());
    }

    #[test]
    fn empty_indexes_are_filled_from_sample_ids() {
        let mut sheet = SampleSheet::new("C0ABCACXX").unwrap();
        sheet.records = vec![record(1, "s_index1", ""), record(1, "s_nothing", ""), record(1, "s_i2", "CGATGT")];
        assert_eq!(sheet.fill_indexes(lookup().unwrap(), false), 1);
        assert_eq!(sheet.records[0].index, "ATCACG");
        assert_eq!(sheet.records[1].index, "");
    }
}
