//! Sample listings and testimonials for fresh stores.

use tracing::info;

use super::Storage;
use crate::error::Result;
use crate::models::{NewProject, NewTestimonial, ProjectStatus};

/// Insert the sample projects and testimonials into any table that is
/// still empty. Returns the number of records inserted.
pub fn seed_if_empty(storage: &dyn Storage) -> Result<usize> {
    let mut inserted = 0;

    if storage.all_projects()?.is_empty() {
        for project in sample_projects() {
            storage.create_project(project)?;
            inserted += 1;
        }
    }

    if storage.all_testimonials()?.is_empty() {
        for testimonial in sample_testimonials() {
            storage.create_testimonial(testimonial)?;
            inserted += 1;
        }
    }

    if inserted > 0 {
        info!(backend = storage.backend(), inserted, "loaded sample data");
    }
    Ok(inserted)
}

#[allow(clippy::too_many_arguments)]
fn listing(
    title: &str,
    description: &str,
    short_description: &str,
    location: &str,
    category: &str,
    property_type: &str,
    roi: &str,
    min_investment: i64,
    target_amount: i64,
    current_amount: i64,
    status: ProjectStatus,
) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        short_description: Some(short_description.to_string()),
        location: location.to_string(),
        category: category.to_string(),
        property_type: property_type.to_string(),
        roi: roi.to_string(),
        min_investment,
        target_amount,
        current_amount: Some(current_amount),
        status,
        ..Default::default()
    }
}

pub fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            property_size: Some(1200),
            bedrooms: Some(2),
            bathrooms: Some(2),
            monthly_rent: Some(8000),
            annual_appreciation: Some("5.20".into()),
            city: Some("Dubai".into()),
            country: Some("UAE".into()),
            expected_completion_date: Some("2024-12-31".into()),
            ..listing(
                "Dubai Marina Tower",
                "Luxury residential tower in the heart of Dubai Marina with premium amenities and stunning views.",
                "Premium residential tower in Dubai Marina",
                "Dubai Marina, UAE",
                "RESIDENTIAL",
                "APARTMENT",
                "12.50",
                50_000,
                5_000_000,
                3_000_000,
                ProjectStatus::Funding,
            )
        },
        NewProject {
            featured: true,
            priority: 1,
            property_size: Some(5000),
            bathrooms: Some(8),
            monthly_rent: Some(50_000),
            annual_appreciation: Some("7.50".into()),
            city: Some("Singapore".into()),
            country: Some("Singapore".into()),
            expected_completion_date: Some("2023-06-30".into()),
            ..listing(
                "Singapore Business Hub",
                "Modern office complex in Singapore's premier business district with high rental yields.",
                "Modern office complex in Singapore CBD",
                "Singapore CBD, Singapore",
                "COMMERCIAL",
                "OFFICE",
                "15.20",
                100_000,
                8_000_000,
                8_000_000,
                ProjectStatus::Complete,
            )
        },
        NewProject {
            property_size: Some(10_000),
            bathrooms: Some(2),
            monthly_rent: Some(15_000),
            annual_appreciation: Some("3.20".into()),
            city: Some("London".into()),
            country: Some("UK".into()),
            expected_completion_date: Some("2024-03-31".into()),
            ..listing(
                "London Tech District",
                "Industrial warehouse facility with long-term lease agreements and stable returns.",
                "Industrial warehouse in London",
                "London, UK",
                "INDUSTRIAL",
                "WAREHOUSE",
                "8.75",
                25_000,
                3_000_000,
                1_500_000,
                ProjectStatus::Funding,
            )
        },
        NewProject {
            featured: true,
            priority: 2,
            property_size: Some(2000),
            bathrooms: Some(2),
            monthly_rent: Some(25_000),
            annual_appreciation: Some("12.50".into()),
            city: Some("Jamshoro".into()),
            country: Some("Pakistan".into()),
            expected_completion_date: Some("2022-12-31".into()),
            ..listing(
                "Petaro Pump",
                "A high-traffic petrol pump located on the main highway in Jamshoro, Pakistan. Fully operational and generating steady returns.",
                "High-traffic petrol pump in Jamshoro",
                "Jamshoro, Pakistan",
                "COMMERCIAL",
                "RETAIL",
                "28.76",
                100_000,
                20_000_000,
                20_000_000,
                ProjectStatus::Complete,
            )
        },
        NewProject {
            property_size: Some(1080),
            bedrooms: Some(4),
            bathrooms: Some(3),
            monthly_rent: Some(12_000),
            annual_appreciation: Some("15.00".into()),
            city: Some("Hyderabad".into()),
            country: Some("Pakistan".into()),
            expected_completion_date: Some("2024-06-30".into()),
            ..listing(
                "120 Sq. Yd. Banglow at Gulistan-e-Noor Mohammad",
                "A modern 120 square yard banglow in the heart of Hyderabad, currently under construction. 70% funded, estimated ROI up to 30% on completion.",
                "Modern banglow in Hyderabad",
                "Gulistan-e-Noor Mohammad, Hyderabad, Pakistan",
                "RESIDENTIAL",
                "VILLA",
                "30.00",
                100_000,
                15_000_000,
                10_500_000,
                ProjectStatus::Funding,
            )
        },
        NewProject {
            property_size: Some(1350),
            bedrooms: Some(5),
            bathrooms: Some(4),
            monthly_rent: Some(15_000),
            annual_appreciation: Some("18.00".into()),
            city: Some("Hyderabad".into()),
            country: Some("Pakistan".into()),
            expected_completion_date: Some("2023-12-31".into()),
            ..listing(
                "150 Sq. Yd. Banglow",
                "A completed 150 square yard banglow, waiting for sale. Excellent opportunity for capital appreciation.",
                "Completed banglow ready for sale",
                "Hyderabad, Pakistan",
                "RESIDENTIAL",
                "VILLA",
                "25.00",
                100_000,
                18_000_000,
                18_000_000,
                ProjectStatus::WaitingForSale,
            )
        },
    ]
}

pub fn sample_testimonials() -> Vec<NewTestimonial> {
    let testimonial = |name: &str, content: &str, featured: bool, location: &str| NewTestimonial {
        name: name.to_string(),
        content: content.to_string(),
        rating: 5,
        verified: true,
        featured,
        location: Some(location.to_string()),
        ..Default::default()
    };

    vec![
        testimonial(
            "PERVAIZ AHMMED",
            "SAIR REIT has revolutionized my investment strategy. The halal approach combined with excellent returns is exactly what I was looking for.",
            false,
            "Dubai, UAE",
        ),
        testimonial(
            "ABDUL AZIZ",
            "The transparency and real-time tracking give me complete confidence in my investments. I've seen consistent 12%+ returns month after month.",
            true,
            "Singapore",
        ),
        testimonial(
            "MAKHDOOM NAVEED",
            "Finally, a platform that combines cutting-edge technology with solid fundamentals. My portfolio has grown 35% since joining SAIR REIT.",
            false,
            "London, UK",
        ),
    ]
}
