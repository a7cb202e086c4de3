use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::models::{College, Counsellor, Scholarship, Stream};

/// Flat CSV shape of a listing record; list fields are joined with `"; "`.
pub trait CsvRow {
    type Row: Serialize;

    /// Column names, in the order the row struct serializes them.
    const HEADERS: &'static [&'static str];

    fn to_row(&self) -> Self::Row;
}

#[derive(Serialize)]
pub struct CollegeRow {
    id: u32,
    name: &'static str,
    location: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    ranking: u32,
    students: u32,
    tuition_fee: &'static str,
    programs: String,
    rating: f32,
    admission_rate: &'static str,
    established_year: u16,
}

impl CsvRow for College {
    type Row = CollegeRow;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "name",
        "location",
        "type",
        "ranking",
        "students",
        "tuition_fee",
        "programs",
        "rating",
        "admission_rate",
        "established_year",
    ];

    fn to_row(&self) -> CollegeRow {
        CollegeRow {
            id: self.id,
            name: self.name,
            location: self.location,
            kind: self.kind,
            ranking: self.ranking,
            students: self.students,
            tuition_fee: self.tuition_fee,
            programs: self.programs.join("; "),
            rating: self.rating,
            admission_rate: self.admission_rate,
            established_year: self.established_year,
        }
    }
}

#[derive(Serialize)]
pub struct CounsellorRow {
    id: u32,
    name: &'static str,
    specializations: String,
    experience_years: u32,
    rating: f32,
    reviews: u32,
    location: &'static str,
    languages: String,
    availability: &'static str,
    hourly_rate: &'static str,
    consultation_modes: String,
}

impl CsvRow for Counsellor {
    type Row = CounsellorRow;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "name",
        "specializations",
        "experience_years",
        "rating",
        "reviews",
        "location",
        "languages",
        "availability",
        "hourly_rate",
        "consultation_modes",
    ];

    fn to_row(&self) -> CounsellorRow {
        CounsellorRow {
            id: self.id,
            name: self.name,
            specializations: self.specializations.join("; "),
            experience_years: self.experience_years,
            rating: self.rating,
            reviews: self.reviews,
            location: self.location,
            languages: self.languages.join("; "),
            availability: self.availability,
            hourly_rate: self.hourly_rate,
            consultation_modes: self.consultation_modes.join("; "),
        }
    }
}

#[derive(Serialize)]
pub struct ScholarshipRow {
    id: u32,
    title: &'static str,
    amount: &'static str,
    deadline: &'static str,
    provider: &'static str,
    category: &'static str,
    eligibility: String,
    requirements: String,
}

impl CsvRow for Scholarship {
    type Row = ScholarshipRow;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "title",
        "amount",
        "deadline",
        "provider",
        "category",
        "eligibility",
        "requirements",
    ];

    fn to_row(&self) -> ScholarshipRow {
        ScholarshipRow {
            id: self.id,
            title: self.title,
            amount: self.amount,
            deadline: self.deadline,
            provider: self.provider,
            category: self.category,
            eligibility: self.eligibility.join("; "),
            requirements: self.requirements.join("; "),
        }
    }
}

#[derive(Serialize)]
pub struct StreamRow {
    id: u32,
    name: &'static str,
    category: &'static str,
    duration: &'static str,
    average_salary: &'static str,
    career_options: String,
    skills: String,
    rating: f32,
}

impl CsvRow for Stream {
    type Row = StreamRow;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "name",
        "category",
        "duration",
        "average_salary",
        "career_options",
        "skills",
        "rating",
    ];

    fn to_row(&self) -> StreamRow {
        StreamRow {
            id: self.id,
            name: self.name,
            category: self.category,
            duration: self.duration,
            average_salary: self.average_salary,
            career_options: self.career_options.join("; "),
            skills: self.skills.join("; "),
            rating: self.rating,
        }
    }
}

/// Writes the header row and one row per record. An empty listing still
/// yields a header-only file.
pub fn write_csv<R: CsvRow>(path: &Path, records: &[&R]) -> anyhow::Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(R::HEADERS)?;
    for record in records {
        writer.serialize(record.to_row())?;
    }
    writer.flush()?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COLLEGES, COUNSELLORS, STREAMS};
    use crate::filter::{CollegeFilters, Listing, StreamFilters};

    #[test]
    fn writes_header_and_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streams.csv");

        let mut listing: Listing<StreamFilters> = Listing::new(STREAMS);
        listing.set_filter("category", "Medical").unwrap();
        let written = write_csv(&path, listing.results()).unwrap();
        assert_eq!(written, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,category,duration,average_salary,career_options,skills,rating")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2,Medicine (MBBS),Medical,5.5 years,"));
        assert!(row.contains("Doctor; Surgeon; Specialist; Medical Researcher"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_listing_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colleges.csv");

        let mut listing: Listing<CollegeFilters> = Listing::new(COLLEGES);
        listing.set_filter("searchTerm", "no such college").unwrap();
        assert_eq!(write_csv(&path, listing.results()).unwrap(), 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "id,name,location,type,ranking,students,tuition_fee,programs,rating,admission_rate,established_year\n"
        );
    }

    #[test]
    fn list_fields_are_joined() {
        let row = COUNSELLORS[2].to_row();
        assert_eq!(row.consultation_modes, "Video Call; Chat");
        assert_eq!(row.languages, "English; Mandarin");
    }
}
