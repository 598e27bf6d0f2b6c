/// Test data factories using builder pattern
///
/// Every factory produces a valid aggregate with random but readable values.
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use video_catalog::modules::cast_member::domain::{
    CastMember, CastMemberProps, CastMemberType, NestedCastMember,
};
use video_catalog::modules::category::domain::{Category, CategoryProps, NestedCategory};
use video_catalog::modules::genre::domain::{Genre, GenreProps, NestedGenre};
use video_catalog::modules::video::domain::{Rating, Video, VideoProps};

const WORDS: &[&str] = &[
    "Silent", "Crimson", "Northern", "Hidden", "Last", "Golden", "Broken", "Electric",
];

fn random_name(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let word = WORDS.choose(&mut rng).copied().unwrap_or("Plain");
    format!("{} {} {}", prefix, word, rng.gen_range(1..10_000))
}

pub struct CategoryFactory {
    props: CategoryProps,
}

impl Default for CategoryFactory {
    fn default() -> Self {
        Self {
            props: CategoryProps::new(random_name("Category")),
        }
    }
}

impl CategoryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.props.name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.props.description = Some(description.to_string());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.props.is_active = false;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.props.deleted_at = Some(Utc::now());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.props.created_at = created_at;
        self
    }

    pub fn build(self) -> Category {
        Category::create(self.props)
    }

    pub fn build_many(count: usize) -> Vec<Category> {
        (0..count).map(|_| Self::new().build()).collect()
    }
}

pub struct GenreFactory {
    props: GenreProps,
}

impl Default for GenreFactory {
    fn default() -> Self {
        Self {
            props: GenreProps::new(random_name("Genre"), Vec::new()),
        }
    }
}

impl GenreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.props.name = name.to_string();
        self
    }

    pub fn with_categories(mut self, categories: &[Category]) -> Self {
        self.props.categories = categories.iter().map(NestedCategory::from).collect();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.props.is_active = false;
        self
    }

    pub fn build(self) -> Genre {
        Genre::create(self.props)
    }
}

pub struct CastMemberFactory {
    props: CastMemberProps,
}

impl Default for CastMemberFactory {
    fn default() -> Self {
        let cast_member_type = if rand::random::<bool>() {
            CastMemberType::Actor
        } else {
            CastMemberType::Director
        };
        Self {
            props: CastMemberProps::new(random_name("Person"), cast_member_type),
        }
    }
}

impl CastMemberFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor(mut self) -> Self {
        self.props.cast_member_type = CastMemberType::Actor;
        self
    }

    pub fn director(mut self) -> Self {
        self.props.cast_member_type = CastMemberType::Director;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.props.name = name.to_string();
        self
    }

    pub fn build(self) -> CastMember {
        CastMember::create(self.props)
    }
}

pub struct VideoFactory {
    props: VideoProps,
}

impl VideoFactory {
    /// Video classified under the given aggregates
    pub fn new(categories: &[Category], genres: &[Genre], cast_members: &[CastMember]) -> Self {
        let mut rng = rand::thread_rng();
        let mut props = VideoProps::new(
            random_name("Video"),
            categories.iter().map(NestedCategory::from).collect(),
            genres.iter().map(NestedGenre::from).collect(),
            cast_members.iter().map(NestedCastMember::from).collect(),
        );
        props.year_launched = rng.gen_range(1950..2025);
        props.duration = rng.gen_range(60..200);
        props.rating = Rating::ALL.choose(&mut rng).copied().unwrap_or(Rating::RL);
        props.video_url = format!("videos/{}.mp4", props.video_id);
        props.trailer_url = format!("trailers/{}.mp4", props.video_id);
        Self { props }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.props.title = title.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.props.description = description.to_string();
        self
    }

    pub fn published(mut self) -> Self {
        self.props.is_published = true;
        self
    }

    pub fn build(self) -> Video {
        Video::create(self.props)
    }
}
