use crate::api::models::{Rating, Review, ReviewResponse};

pub const RATINGS_UNAVAILABLE: &str = "Ratings service is currently unavailable";

/// The two fixed reviewers and their review text, in response order
pub const REVIEWERS: [(&str, &str); 2] = [
    (
        "Reviewer1",
        "An extremely entertaining play by Shakespeare. The slapstick humour is refreshing!",
    ),
    (
        "Reviewer2",
        "Absolutely fun and entertaining. The play lacks thematic depth when compared to other plays by Shakespeare.",
    ),
];

/// Build the review document for `product_id`.
///
/// `None` stars mean the rating is unavailable and yield an error rating
/// instead of a score.
pub fn compose(
    product_id: &str,
    stars_reviewer1: Option<u32>,
    stars_reviewer2: Option<u32>,
    star_color: &str,
) -> ReviewResponse {
    let [(name1, text1), (name2, text2)] = REVIEWERS;

    ReviewResponse {
        id: product_id.to_string(),
        reviews: [
            review(name1, text1, rating(stars_reviewer1, star_color)),
            review(name2, text2, rating(stars_reviewer2, star_color)),
        ],
    }
}

fn rating(stars: Option<u32>, star_color: &str) -> Rating {
    match stars {
        Some(stars) => Rating::Scored {
            stars,
            color: star_color.to_string(),
        },
        None => Rating::Unavailable {
            error: RATINGS_UNAVAILABLE.to_string(),
        },
    }
}

fn review(reviewer: &str, text: &str, rating: Rating) -> Review {
    Review {
        reviewer: reviewer.to_string(),
        text: text.to_string(),
        rating,
    }
}
