use std::path::Path;

use thiserror::Error;

use crate::core::{distance::bounds_of, skills::unique_skills};
use crate::models::{Internship, MapBounds};

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid listing #{index}: {reason}")]
    InvalidListing { index: usize, reason: String },
}

/// Read-only set of internship listings
#[derive(Debug, Clone)]
pub struct Catalog {
    internships: Vec<Internship>,
}

impl Catalog {
    /// Build a catalog after validating every listing
    pub fn new(internships: Vec<Internship>) -> Result<Self, CatalogError> {
        for (index, internship) in internships.iter().enumerate() {
            validate_listing(internship)
                .map_err(|reason| CatalogError::InvalidListing { index, reason })?;
        }

        Ok(Self { internships })
    }

    /// Load a JSON array of listings
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let internships: Vec<Internship> = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} internships from {}",
            internships.len(),
            path.as_ref().display()
        );

        Self::new(internships)
    }

    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    pub fn len(&self) -> usize {
        self.internships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internships.is_empty()
    }

    pub fn skills(&self) -> Vec<String> {
        unique_skills(&self.internships)
    }

    pub fn bounds(&self) -> Option<MapBounds> {
        bounds_of(self.internships.iter().map(Internship::location))
    }

    /// Listings bundled with the service, all in the Dubai area
    pub fn builtin() -> Self {
        let internships = BUILTIN
            .iter()
            .map(|&(company, title, latitude, longitude, skills)| Internship {
                company: company.to_string(),
                title: title.to_string(),
                latitude,
                longitude,
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        Self { internships }
    }
}

fn validate_listing(internship: &Internship) -> Result<(), String> {
    if internship.company.trim().is_empty() {
        return Err("company name is empty".to_string());
    }
    if internship.title.trim().is_empty() {
        return Err(format!("title is empty for {}", internship.company));
    }
    if !internship.location().is_valid() {
        return Err(format!(
            "coordinate ({}, {}) out of range for {}",
            internship.latitude, internship.longitude, internship.company
        ));
    }
    Ok(())
}

type Listing = (&'static str, &'static str, f64, f64, &'static [&'static str]);

const BUILTIN: &[Listing] = &[
    ("ESRI", "Software Engineering Intern", 25.3297, 55.3913,
        &["GIS", "Python", "Security", "Java", "Machine Learning"]),
    ("Google", "Software Engineering Intern", 25.197525, 55.274288,
        &["Python", "Machine Learning", "AI", "Cloud", "Mobile Development"]),
    ("Microsoft", "Data Science Intern", 25.234511, 55.324905,
        &["Python", "Java", "SQL", "Machine Learning", "AI"]),
    ("IBM", "Cloud Solutions Intern", 25.276987, 55.296249,
        &["Java", "Cloud", "Security", "Blockchain"]),
    ("Amazon Web Services", "Cloud Engineering Intern", 25.211234, 55.283456,
        &["Cloud Computing", "DevOps", "Big Data"]),
    ("Nvidia", "AI Research Intern", 25.265432, 55.312345,
        &["GPU Computing", "Machine Learning", "Deep Learning"]),
    ("Adobe", "UX/UI Design Intern", 25.243567, 55.298765,
        &["UX/UI Design", "Digital Marketing", "Cloud Services"]),
    ("Oracle", "Database Development Intern", 25.222345, 55.289876,
        &["SQL", "DBMS", "Java", "Cloud Infrastructure"]),
    ("Cisco Systems", "Network Engineering Intern", 25.254567, 55.301234,
        &["Networking", "Security", "IoT", "Python"]),
    ("SAP", "ERP Development Intern", 25.287654, 55.334567,
        &["ERP", "ABAP", "Cloud", "Data Analytics"]),
    ("Huawei", "5G Technology Intern", 25.198765, 55.287654,
        &["5G", "AI", "Cloud Computing", "IoT"]),
    ("Salesforce", "CRM Development Intern", 25.245678, 55.323456,
        &["CRM", "Cloud Computing", "AI"]),
    ("Intel", "Hardware Engineering Intern", 25.267890, 55.345678,
        &["Hardware Design", "AI", "IoT", "Cloud Computing"]),
    ("Careem", "Mobile Development Intern", 25.234567, 55.290123,
        &["Mobile Development", "AI", "Data Science"]),
    ("Noon", "E-commerce Development Intern", 25.256789, 55.312345,
        &["E-commerce", "Mobile Development", "AI"]),
    ("Mastercard", "Fintech Development Intern", 25.289012, 55.334567,
        &["Fintech", "Cybersecurity", "Blockchain"]),
    ("Accenture", "Technology Consulting Intern", 25.223456, 55.287654,
        &["Consulting", "AI", "Blockchain", "Cloud"]),
    ("Infosys", "Software Development Intern", 25.245678, 55.301234,
        &["Software Development", "Cloud Computing", "Data Analytics"]),
    ("Dell Technologies", "Cloud Infrastructure Intern", 25.267890, 55.323456,
        &["Cloud Computing", "Virtualization", "Data Storage"]),
    ("Siemens", "Industrial IoT Intern", 25.212345, 55.289012,
        &["IoT", "Automation", "Industrial Software"]),
    ("HP Inc.", "3D Technology Intern", 25.234567, 55.312345,
        &["Hardware Engineering", "3D Printing", "AI"]),
    ("Autodesk", "CAD Development Intern", 25.256789, 55.334567,
        &["CAD", "3D Modeling", "Cloud-based Design"]),
    ("Bosch", "IoT Development Intern", 25.278901, 55.356789,
        &["IoT", "Automotive Technology", "AI"]),
    ("GE Digital", "Industrial Digital Intern", 25.223456, 55.301234,
        &["Industrial IoT", "Data Analytics", "Cloud Platforms"]),
    ("Etisalat Digital", "Telecommunications Intern", 25.245678, 55.323456,
        &["Telecommunications", "5G", "Digital Transformation"]),
    ("Souq.com (Amazon)", "E-commerce Development Intern", 25.267890, 55.345678,
        &["E-commerce", "Web Development", "Data Analytics"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 26);

        let revalidated = Catalog::new(builtin.internships().to_vec());
        assert!(revalidated.is_ok());
    }

    #[test]
    fn test_builtin_company_names_unique() {
        let builtin = Catalog::builtin();
        let names: HashSet<&str> = builtin
            .internships()
            .iter()
            .map(|i| i.company.as_str())
            .collect();

        assert_eq!(names.len(), builtin.len());
    }

    #[test]
    fn test_skills_are_lowercase_and_sorted() {
        let skills = Catalog::builtin().skills();

        assert!(skills.contains(&"machine learning".to_string()));
        assert!(skills.windows(2).all(|w| w[0] < w[1]));
        assert!(skills.iter().all(|s| *s == s.to_lowercase()));
    }

    #[test]
    fn test_bounds_cover_all_listings() {
        let catalog = Catalog::builtin();
        let bounds = catalog.bounds().unwrap();

        for internship in catalog.internships() {
            assert!(internship.latitude >= bounds.south_west.latitude);
            assert!(internship.latitude <= bounds.north_east.latitude);
            assert!(internship.longitude >= bounds.south_west.longitude);
            assert!(internship.longitude <= bounds.north_east.longitude);
        }
    }

    #[test]
    fn test_rejects_invalid_listing() {
        let mut listings = Catalog::builtin().internships().to_vec();
        listings[3].latitude = 95.0;

        let err = Catalog::new(listings).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidListing { index: 3, .. }));
    }

    #[test]
    fn test_rejects_blank_company() {
        let mut listings = Catalog::builtin().internships().to_vec();
        listings[0].company = "  ".to_string();

        assert!(Catalog::new(listings).is_err());
    }
}
