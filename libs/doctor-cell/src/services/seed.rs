// Built-in doctor roster served when no catalog file is configured.
use chrono::NaiveDate;

use crate::models::{Doctor, DoctorStatus, TimeSlot};

fn january(day: u32, slots: &[&str]) -> TimeSlot {
    TimeSlot {
        date: NaiveDate::from_ymd_opt(2025, 1, day).expect("seed dates are valid January days"),
        slots: slots.iter().map(|s| s.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    specialization: &str,
    image: &str,
    status: DoctorStatus,
    rating: f32,
    experience: u32,
    education: &str,
    about: &str,
    availability: Vec<TimeSlot>,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        image: image.to_string(),
        status,
        rating,
        experience,
        education: education.to_string(),
        about: about.to_string(),
        availability,
    }
}

pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "1",
            "Dr. Sarah Johnson",
            "Cardiologist",
            "https://images.pexels.com/photos/5327580/pexels-photo-5327580.jpeg?auto=compress&cs=tinysrgb&w=400",
            DoctorStatus::Available,
            4.9,
            12,
            "MD from Harvard Medical School",
            "Dr. Sarah Johnson is a board-certified cardiologist with over 12 years of experience in treating cardiovascular diseases. She specializes in preventive cardiology and advanced cardiac imaging.",
            vec![
                january(20, &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"]),
                january(21, &["09:00", "10:00", "14:00", "15:00"]),
                january(22, &["09:00", "11:00", "14:00", "15:00", "16:00"]),
            ],
        ),
        doctor(
            "2",
            "Dr. Michael Chen",
            "Neurologist",
            "https://images.pexels.com/photos/6129967/pexels-photo-6129967.jpeg?auto=compress&cs=tinysrgb&w=400",
            DoctorStatus::Available,
            4.8,
            15,
            "MD from Johns Hopkins University",
            "Dr. Michael Chen is a renowned neurologist specializing in epilepsy, stroke, and neurodegenerative diseases. He has published numerous research papers in leading medical journals.",
            vec![
                january(20, &["10:00", "11:00", "15:00", "16:00"]),
                january(21, &["09:00", "10:00", "11:00", "14:00", "15:00"]),
                january(23, &["09:00", "10:00", "14:00", "15:00"]),
            ],
        ),
        doctor(
            "3",
            "Dr. Emily Rodriguez",
            "Pediatrician",
            "https://images.pexels.com/photos/5452293/pexels-photo-5452293.jpeg?auto=compress&cs=tinysrgb&w=400",
            DoctorStatus::Busy,
            4.9,
            8,
            "MD from Stanford University",
            "Dr. Emily Rodriguez is a compassionate pediatrician who provides comprehensive care for children from infancy through adolescence. She has a special interest in developmental pediatrics.",
            vec![
                january(22, &["14:00", "15:00"]),
                january(23, &["09:00", "10:00", "11:00"]),
            ],
        ),
        doctor(
            "4",
            "Dr. James Wilson",
            "Orthopedic Surgeon",
            "https://images.pexels.com/photos/6129020/pexels-photo-6129020.jpeg?auto=compress&cs=tinysrgb&w=400",
            DoctorStatus::Available,
            4.7,
            18,
            "MD from Mayo Clinic",
            "Dr. James Wilson is an experienced orthopedic surgeon specializing in joint replacement, sports medicine, and trauma surgery. He has performed over 3000 successful surgeries.",
            vec![
                january(20, &["09:00", "10:00", "14:00"]),
                january(21, &["11:00", "14:00", "15:00", "16:00"]),
                january(22, &["09:00", "10:00", "11:00", "15:00"]),
            ],
        ),
        doctor(
            "5",
            "Dr. Lisa Thompson",
            "Dermatologist",
            "https://images.pexels.com/photos/5214413/pexels-photo-5214413.jpeg?auto=compress&cs=tinysrgb&w=400",
            DoctorStatus::OnLeave,
            4.8,
            10,
            "MD from UCLA Medical School",
            "Dr. Lisa Thompson is a board-certified dermatologist with expertise in medical, surgical, and cosmetic dermatology. She specializes in skin cancer detection and treatment.",
            vec![],
        ),
        doctor(
            "6",
            "Dr. Robert Kumar",
            "Gastroenterologist",
            "https://images.pexels.com/photos/5452201/pexels-photo-5452201.jpeg?auto=compress&cs=tinysrgb&w=400",
            DoctorStatus::Available,
            4.6,
            14,
            "MD from University of Pennsylvania",
            "Dr. Robert Kumar is a skilled gastroenterologist specializing in digestive disorders, liver diseases, and endoscopic procedures. He is known for his patient-centered approach.",
            vec![
                january(20, &["11:00", "14:00", "15:00"]),
                january(22, &["09:00", "10:00", "14:00", "16:00"]),
                january(23, &["10:00", "11:00", "14:00", "15:00"]),
            ],
        ),
    ]
}
