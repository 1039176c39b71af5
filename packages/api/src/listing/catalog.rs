//! Built-in listings shown on the job board and brand directory.

use crate::models::{Brand, Job, JobType};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    job_type: JobType,
    posted_days_ago: u32,
    tag_values: &[&str],
    is_featured: bool,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        logo: String::new(),
        location: location.to_string(),
        salary: salary.to_string(),
        job_type,
        posted_days_ago,
        tags: tags(tag_values),
        is_featured,
    }
}

#[allow(clippy::too_many_arguments)]
fn brand(
    id: &str,
    name: &str,
    category: &str,
    location: &str,
    employee_count: &str,
    year_founded: u16,
    job_count: u32,
    tag_values: &[&str],
    is_featured: bool,
) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        logo: String::new(),
        category: category.to_string(),
        location: location.to_string(),
        employee_count: employee_count.to_string(),
        year_founded,
        job_count,
        tags: tags(tag_values),
        is_featured,
    }
}

pub fn jobs() -> Vec<Job> {
    vec![
        job(
            "1",
            "Senior Shopify Developer",
            "Allbirds",
            "Remote",
            "$100,000 - $130,000",
            JobType::FullTime,
            2,
            &["Shopify", "JavaScript", "React", "Liquid"],
            true,
        ),
        job(
            "2",
            "Ecommerce Marketing Manager",
            "Gymshark",
            "Remote, US",
            "$85,000 - $105,000",
            JobType::FullTime,
            3,
            &["Marketing", "SEO", "Shopify", "Analytics"],
            true,
        ),
        job(
            "3",
            "Shopify Store Manager",
            "MVMT",
            "Los Angeles, CA",
            "$70,000 - $90,000",
            JobType::FullTime,
            7,
            &["Ecommerce", "Shopify", "Management"],
            false,
        ),
        job(
            "4",
            "Front-end Developer (Shopify)",
            "Kylie Cosmetics",
            "Remote",
            "$80,000 - $95,000",
            JobType::Contract,
            14,
            &["JavaScript", "HTML/CSS", "Shopify", "Liquid"],
            false,
        ),
        job(
            "5",
            "Shopify Theme Developer",
            "Bombas",
            "New York, NY",
            "$85,000 - $110,000",
            JobType::FullTime,
            3,
            &["Shopify", "Theme Development", "JavaScript", "Liquid"],
            false,
        ),
        job(
            "6",
            "Ecommerce Operations Specialist",
            "Away",
            "Remote",
            "$65,000 - $75,000",
            JobType::FullTime,
            5,
            &["Operations", "Shopify", "Inventory", "Customer Service"],
            false,
        ),
    ]
}

pub fn brands() -> Vec<Brand> {
    vec![
        brand(
            "1",
            "Allbirds",
            "Footwear & Apparel",
            "San Francisco, CA",
            "500-1000",
            2016,
            3,
            &["Sustainable", "D2C", "Fashion"],
            true,
        ),
        brand(
            "2",
            "Gymshark",
            "Fitness Apparel",
            "United Kingdom",
            "1000+",
            2012,
            5,
            &["Fitness", "Apparel", "Global"],
            true,
        ),
        brand(
            "3",
            "MVMT",
            "Watches & Accessories",
            "Los Angeles, CA",
            "100-500",
            2013,
            2,
            &["Accessories", "Fashion", "D2C"],
            false,
        ),
        brand(
            "4",
            "Kylie Cosmetics",
            "Beauty & Cosmetics",
            "California",
            "100-500",
            2015,
            4,
            &["Beauty", "Cosmetics", "Celebrity"],
            false,
        ),
        brand(
            "5",
            "Bombas",
            "Socks & Apparel",
            "New York, NY",
            "100-500",
            2013,
            3,
            &["Apparel", "Social Good", "D2C"],
            false,
        ),
        brand(
            "6",
            "Away",
            "Travel & Luggage",
            "New York, NY",
            "100-500",
            2015,
            2,
            &["Travel", "Luggage", "D2C"],
            false,
        ),
    ]
}
