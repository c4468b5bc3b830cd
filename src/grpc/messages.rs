// ---------------------------------------------------------------------------
// Message types (prost, standard protobuf wire format)
// ---------------------------------------------------------------------------
//
// Enums travel as int32 with 0 meaning UNKNOWN.

#[derive(Clone, PartialEq, prost::Message)]
pub struct MemoryMessage {
    #[prost(uint64, tag = "1")]
    pub value: u64,
    #[prost(int32, tag = "2")]
    pub unit: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CpuMessage {
    #[prost(string, tag = "1")]
    pub brand: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(uint32, tag = "3")]
    pub number_cores: u32,
    #[prost(uint32, tag = "4")]
    pub number_threads: u32,
    #[prost(double, tag = "5")]
    pub min_ghz: f64,
    #[prost(double, tag = "6")]
    pub max_ghz: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GpuMessage {
    #[prost(string, tag = "1")]
    pub brand: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(double, tag = "3")]
    pub min_ghz: f64,
    #[prost(double, tag = "4")]
    pub max_ghz: f64,
    #[prost(message, optional, tag = "5")]
    pub memory: Option<MemoryMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StorageMessage {
    #[prost(int32, tag = "1")]
    pub driver: i32,
    #[prost(message, optional, tag = "2")]
    pub memory: Option<MemoryMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ResolutionMessage {
    #[prost(uint32, tag = "1")]
    pub width: u32,
    #[prost(uint32, tag = "2")]
    pub height: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ScreenMessage {
    #[prost(float, tag = "1")]
    pub size_inch: f32,
    #[prost(message, optional, tag = "2")]
    pub resolution: Option<ResolutionMessage>,
    #[prost(int32, tag = "3")]
    pub panel: i32,
    #[prost(bool, tag = "4")]
    pub multitouch: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct KeyboardMessage {
    #[prost(int32, tag = "1")]
    pub layout: i32,
    #[prost(bool, tag = "2")]
    pub backlit: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TimestampMessage {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

#[derive(Clone, PartialEq, prost::Oneof)]
pub enum WeightMessage {
    #[prost(double, tag = "10")]
    WeightKg(f64),
    #[prost(double, tag = "11")]
    WeightLb(f64),
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LaptopMessage {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub brand: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(message, optional, tag = "4")]
    pub cpu: Option<CpuMessage>,
    #[prost(message, optional, tag = "5")]
    pub ram: Option<MemoryMessage>,
    #[prost(message, repeated, tag = "6")]
    pub gpus: Vec<GpuMessage>,
    #[prost(message, repeated, tag = "7")]
    pub storages: Vec<StorageMessage>,
    #[prost(message, optional, tag = "8")]
    pub screen: Option<ScreenMessage>,
    #[prost(message, optional, tag = "9")]
    pub keyboard: Option<KeyboardMessage>,
    #[prost(oneof = "WeightMessage", tags = "10, 11")]
    pub weight: Option<WeightMessage>,
    #[prost(double, tag = "12")]
    pub price_usd: f64,
    #[prost(uint32, tag = "13")]
    pub release_year: u32,
    #[prost(message, optional, tag = "14")]
    pub updated_at: Option<TimestampMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FilterMessage {
    #[prost(double, optional, tag = "1")]
    pub max_price_usd: Option<f64>,
    #[prost(uint32, tag = "2")]
    pub min_cpu_cores: u32,
    #[prost(double, tag = "3")]
    pub min_cpu_ghz: f64,
    #[prost(message, optional, tag = "4")]
    pub min_ram: Option<MemoryMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateLaptopRequest {
    #[prost(message, optional, tag = "1")]
    pub laptop: Option<LaptopMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateLaptopResponse {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FindLaptopRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FindLaptopResponse {
    #[prost(message, optional, tag = "1")]
    pub laptop: Option<LaptopMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchLaptopRequest {
    #[prost(message, optional, tag = "1")]
    pub filter: Option<FilterMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchLaptopResponse {
    #[prost(message, optional, tag = "1")]
    pub laptop: Option<LaptopMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ImageInfoMessage {
    #[prost(string, tag = "1")]
    pub laptop_id: String,
    #[prost(string, tag = "2")]
    pub image_type: String,
}

/// The first upload message carries `Info`, every later one a chunk.
#[derive(Clone, PartialEq, prost::Oneof)]
pub enum UploadImageData {
    #[prost(message, tag = "1")]
    Info(ImageInfoMessage),
    #[prost(bytes = "vec", tag = "2")]
    ChunkData(Vec<u8>),
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UploadImageRequest {
    #[prost(oneof = "UploadImageData", tags = "1, 2")]
    pub data: Option<UploadImageData>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UploadImageResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(uint32, tag = "2")]
    pub size: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RateLaptopRequest {
    #[prost(string, tag = "1")]
    pub laptop_id: String,
    #[prost(double, tag = "2")]
    pub score: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RateLaptopResponse {
    #[prost(string, tag = "1")]
    pub laptop_id: String,
    #[prost(uint32, tag = "2")]
    pub rated_count: u32,
    #[prost(double, tag = "3")]
    pub average_score: f64,
}
