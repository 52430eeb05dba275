mod image_downloader;

pub use image_downloader::HttpImageFetcher;
