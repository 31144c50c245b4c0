//! Illustrative image "analysis" for the AI detection demo.
//!
//! This is NOT a classifier. It averages the colour channels of an uploaded
//! picture and maps the dominant channel to one of a handful of canned
//! result cards. Nothing here should be read as a diagnosis.
//!
//! | mean colour                      | card                          |
//! |----------------------------------|-------------------------------|
//! | red > 150 and red dominant       | Inflammatory Condition        |
//! | green dominant                   | Possible Bacterial Infection  |
//! | blue dominant                    | Circulation-Related Condition |
//! | anything else                    | Skin Irritation / Dermatological Condition |

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use shared::AnalysisReport;

/// Mean channel intensities of an RGBA image (0-255 each)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelStats {
    pub width: u32,
    pub height: u32,
    pub mean_red: f64,
    pub mean_green: f64,
    pub mean_blue: f64,
}

impl PixelStats {
    /// Average raw RGBA8 pixel data. Alpha is ignored.
    pub fn from_rgba(width: u32, height: u32, pixels: &[u8]) -> Result<Self> {
        let pixel_count = pixels.len() / 4;
        if pixel_count == 0 {
            return Err(anyhow!("Image has no pixels"));
        }
        if pixel_count != (width as usize) * (height as usize) {
            return Err(anyhow!(
                "Pixel buffer holds {} pixels but the image is {}x{}",
                pixel_count,
                width,
                height
            ));
        }

        let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
        for pixel in pixels.chunks_exact(4) {
            red += pixel[0] as u64;
            green += pixel[1] as u64;
            blue += pixel[2] as u64;
        }

        let n = pixel_count as f64;
        Ok(Self {
            width,
            height,
            mean_red: red as f64 / n,
            mean_green: green as f64 / n,
            mean_blue: blue as f64 / n,
        })
    }

    pub fn brightness(&self) -> f64 {
        (self.mean_red + self.mean_green + self.mean_blue) / 3.0
    }

    /// Stable pseudo-random value derived from the colour means
    fn jitter(&self) -> u64 {
        ((self.mean_red * 7.0 + self.mean_green * 11.0 + self.mean_blue * 13.0) * 10.0) as u64
    }

    fn confidence_in(&self, base: u8, span: u8) -> u8 {
        base + (self.jitter() % span as u64) as u8
    }
}

/// The fixed set of result cards the demo can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedResult {
    Inflammatory { confidence: u8 },
    BacterialInfection { confidence: u8 },
    Circulation { confidence: u8 },
    SkinIrritation { confidence: u8 },
    Dermatological { confidence: u8 },
}

/// Pick a canned card from colour statistics. Pure and deterministic.
pub fn classify(stats: &PixelStats) -> CannedResult {
    let (r, g, b) = (stats.mean_red, stats.mean_green, stats.mean_blue);

    if r > 150.0 && r > g && r > b {
        CannedResult::Inflammatory {
            confidence: stats.confidence_in(80, 15),
        }
    } else if g > r && g > b {
        CannedResult::BacterialInfection {
            confidence: stats.confidence_in(75, 10),
        }
    } else if b > r && b > g {
        CannedResult::Circulation {
            confidence: stats.confidence_in(78, 12),
        }
    } else if (stats.brightness().round() as u64) % 2 == 0 {
        CannedResult::SkinIrritation {
            confidence: stats.confidence_in(82, 10),
        }
    } else {
        CannedResult::Dermatological {
            confidence: stats.confidence_in(85, 8),
        }
    }
}

impl CannedResult {
    pub fn name(&self) -> &'static str {
        match self {
            CannedResult::Inflammatory { .. } => "Inflammatory Condition",
            CannedResult::BacterialInfection { .. } => "Possible Bacterial Infection",
            CannedResult::Circulation { .. } => "Circulation-Related Condition",
            CannedResult::SkinIrritation { .. } => "Skin Irritation",
            CannedResult::Dermatological { .. } => "Dermatological Condition",
        }
    }

    pub fn confidence(&self) -> u8 {
        match *self {
            CannedResult::Inflammatory { confidence }
            | CannedResult::BacterialInfection { confidence }
            | CannedResult::Circulation { confidence }
            | CannedResult::SkinIrritation { confidence }
            | CannedResult::Dermatological { confidence } => confidence,
        }
    }

    pub fn severity(&self) -> &'static str {
        match self {
            CannedResult::Inflammatory { .. } => "Moderate",
            CannedResult::BacterialInfection { .. } => "High",
            CannedResult::Circulation { .. } => "Moderate to High",
            CannedResult::SkinIrritation { .. } => "Mild",
            CannedResult::Dermatological { .. } => "Mild to Moderate",
        }
    }

    pub fn symptoms(&self) -> &'static [&'static str] {
        match self {
            CannedResult::Inflammatory { .. } => &[
                "Redness",
                "Inflammation",
                "Possible swelling",
                "Warmth in affected area",
            ],
            CannedResult::BacterialInfection { .. } => &[
                "Discoloration",
                "Possible discharge",
                "Localized infection",
                "Tissue changes",
            ],
            CannedResult::Circulation { .. } => &[
                "Bluish discoloration",
                "Poor circulation",
                "Possible numbness",
                "Temperature changes",
            ],
            CannedResult::SkinIrritation { .. } => &[
                "Mild irritation",
                "Possible itching",
                "Skin texture changes",
                "Localized reaction",
            ],
            CannedResult::Dermatological { .. } => &[
                "Skin pattern changes",
                "Texture variation",
                "Possible scaling",
                "Color variation",
            ],
        }
    }

    pub fn prevention(&self) -> &'static [&'static str] {
        match self {
            CannedResult::Inflammatory { .. } => &[
                "Apply cold compress",
                "Keep area clean",
                "Avoid irritants",
                "Consult healthcare provider",
            ],
            CannedResult::BacterialInfection { .. } => &[
                "Antibiotic treatment may be needed",
                "Keep area sterile",
                "Avoid contamination",
                "Immediate medical consultation",
            ],
            CannedResult::Circulation { .. } => &[
                "Improve circulation",
                "Keep warm",
                "Gentle massage",
                "Medical evaluation needed",
            ],
            CannedResult::SkinIrritation { .. } => &[
                "Use gentle skincare",
                "Avoid harsh chemicals",
                "Moisturize regularly",
                "Identify triggers",
            ],
            CannedResult::Dermatological { .. } => &[
                "Maintain skin hygiene",
                "Use appropriate treatments",
                "Avoid triggers",
                "Regular monitoring",
            ],
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            CannedResult::Inflammatory { .. } => &[
                "Monitor for changes in size or color",
                "Keep the affected area clean and dry",
                "Avoid scratching or touching",
                "Seek medical attention if symptoms worsen",
            ],
            CannedResult::BacterialInfection { .. } => &[
                "Seek immediate medical attention",
                "Do not attempt self-treatment",
                "Keep area covered and clean",
                "Take photos to track progression",
            ],
            CannedResult::Circulation { .. } => &[
                "Elevate the affected area",
                "Apply gentle warmth",
                "Avoid tight clothing",
                "Consult vascular specialist",
            ],
            CannedResult::SkinIrritation { .. } => &[
                "Use hypoallergenic products",
                "Apply gentle moisturizer",
                "Avoid known irritants",
                "Monitor for improvement",
            ],
            CannedResult::Dermatological { .. } => &[
                "Document changes with photos",
                "Use prescribed treatments",
                "Maintain consistent skincare routine",
                "Follow up with dermatologist",
            ],
        }
    }

    pub fn possible_causes(&self) -> &'static [&'static str] {
        match self {
            CannedResult::Inflammatory { .. } => &[
                "Allergic reaction",
                "Infection",
                "Irritant contact",
                "Autoimmune response",
            ],
            CannedResult::BacterialInfection { .. } => &[
                "Bacterial infection",
                "Wound contamination",
                "Poor hygiene",
                "Compromised immunity",
            ],
            CannedResult::Circulation { .. } => &[
                "Poor circulation",
                "Vascular issues",
                "Cold exposure",
                "Underlying medical condition",
            ],
            CannedResult::SkinIrritation { .. } => &[
                "Contact irritation",
                "Dry skin",
                "Environmental factors",
                "Product sensitivity",
            ],
            CannedResult::Dermatological { .. } => &[
                "Genetic factors",
                "Environmental exposure",
                "Age-related changes",
                "Hormonal factors",
            ],
        }
    }

    /// Build the result card for an image analysed at `now`
    pub fn to_report(&self, stats: &PixelStats, now: DateTime<Utc>) -> AnalysisReport {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        AnalysisReport {
            name: self.name().to_string(),
            confidence: self.confidence(),
            severity: self.severity().to_string(),
            symptoms: owned(self.symptoms()),
            prevention: owned(self.prevention()),
            recommendations: owned(self.recommendations()),
            possible_causes: owned(self.possible_causes()),
            analysis_id: format!("AI-{}", now.timestamp_millis()),
            timestamp: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            image_size: format!("{}x{}", stats.width, stats.height),
        }
    }
}

/// Decode an uploaded image (PNG, JPEG, GIF or WebP) and produce a card
pub fn analyze_image(bytes: &[u8], now: DateTime<Utc>) -> Result<AnalysisReport> {
    let image = image::load_from_memory(bytes).context("Uploaded file is not a supported image")?;
    let rgba = image.to_rgba8();
    let stats = PixelStats::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())?;

    let result = classify(&stats);
    info!(
        "🔬 Image {}x{} mapped to '{}' ({}%)",
        stats.width,
        stats.height,
        result.name(),
        result.confidence()
    );
    Ok(result.to_report(&stats, now))
}
