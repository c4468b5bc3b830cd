fn main() {
    // Only run gRPC codegen when the "grpc" feature is enabled.
    // Cargo sets CARGO_FEATURE_GRPC when compiling with --features grpc.
    if std::env::var("CARGO_FEATURE_GRPC").is_ok() {
        let service = tonic_build::manual::Service::builder()
            .name("LaptopService")
            .package("catalog")
            .method(
                tonic_build::manual::Method::builder()
                    .name("create_laptop")
                    .route_name("CreateLaptop")
                    .input_type("crate::grpc::CreateLaptopRequest")
                    .output_type("crate::grpc::CreateLaptopResponse")
                    .codec_path("tonic::codec::ProstCodec")
                    .build(),
            )
            .method(
                tonic_build::manual::Method::builder()
                    .name("find_laptop")
                    .route_name("FindLaptop")
                    .input_type("crate::grpc::FindLaptopRequest")
                    .output_type("crate::grpc::FindLaptopResponse")
                    .codec_path("tonic::codec::ProstCodec")
                    .build(),
            )
            .method(
                tonic_build::manual::Method::builder()
                    .name("search_laptop")
                    .route_name("SearchLaptop")
                    .input_type("crate::grpc::SearchLaptopRequest")
                    .output_type("crate::grpc::SearchLaptopResponse")
                    .codec_path("tonic::codec::ProstCodec")
                    .server_streaming()
                    .build(),
            )
            .method(
                tonic_build::manual::Method::builder()
                    .name("upload_image")
                    .route_name("UploadImage")
                    .input_type("crate::grpc::UploadImageRequest")
                    .output_type("crate::grpc::UploadImageResponse")
                    .codec_path("tonic::codec::ProstCodec")
                    .client_streaming()
                    .build(),
            )
            .method(
                tonic_build::manual::Method::builder()
                    .name("rate_laptop")
                    .route_name("RateLaptop")
                    .input_type("crate::grpc::RateLaptopRequest")
                    .output_type("crate::grpc::RateLaptopResponse")
                    .codec_path("tonic::codec::ProstCodec")
                    .client_streaming()
                    .server_streaming()
                    .build(),
            )
            .build();

        tonic_build::manual::Builder::new().compile(&[service]);
    }
}
