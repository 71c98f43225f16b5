pub mod director;
pub mod film;
pub mod loaders;

pub use director::{director_key, DirectorFilmography};
pub use film::Film;
pub use loaders::{load_director_urls, DirectorList};
