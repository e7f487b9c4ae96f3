use aws_smithy_runtime::client::http::hyper_014::HyperClientBuilder;
use aws_smithy_runtime_api::client::http::SharedHttpClient;
use rustls::{ClientConfig, OwnedTrustAnchor, ProtocolVersion, RootCertStore, SupportedProtocolVersion};
use tracing::debug;

use crate::error::ParamError;

/// Lowest protocol version the client will negotiate.
pub const MIN_TLS_VERSION: ProtocolVersion = ProtocolVersion::TLSv1_2;

static PROTOCOL_VERSIONS: &[&SupportedProtocolVersion] =
    &[&rustls::version::TLS12, &rustls::version::TLS13];

pub fn protocol_versions() -> &'static [&'static SupportedProtocolVersion] {
    PROTOCOL_VERSIONS
}

pub fn protocol_name(version: ProtocolVersion) -> &'static str {
    match version {
        ProtocolVersion::TLSv1_0 => "TLS 1.0",
        ProtocolVersion::TLSv1_1 => "TLS 1.1",
        ProtocolVersion::TLSv1_2 => "TLS 1.2",
        ProtocolVersion::TLSv1_3 => "TLS 1.3",
        _ => "Unknown",
    }
}

fn root_store() -> RootCertStore {
    let mut roots = RootCertStore::empty();
    roots.add_trust_anchors(webpki_roots::TLS_SERVER_ROOTS.iter().map(|ta| {
        OwnedTrustAnchor::from_subject_spki_name_constraints(
            ta.subject,
            ta.spki,
            ta.name_constraints,
        )
    }));
    roots
}

pub fn tls_config() -> Result<ClientConfig, rustls::Error> {
    let config = ClientConfig::builder()
        .with_safe_default_cipher_suites()
        .with_safe_default_kx_groups()
        .with_protocol_versions(protocol_versions())?
        .with_root_certificates(root_store())
        .with_no_client_auth();

    Ok(config)
}

/// HTTP client handed to the SDK in place of its default connector.
///
/// Plain http stays allowed: the ECS container endpoint and IMDS, which the
/// credential and region chains talk to, do not speak TLS. Every TLS
/// connection goes through `tls_config`.
pub fn build_http_client() -> Result<SharedHttpClient, ParamError> {
    let tls = tls_config()
        .map_err(|e| ParamError::SessionConstructionFailure(format!("invalid TLS config: {e}")))?;

    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_tls_config(tls)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build();

    debug!(
        "HTTP client built: min TLS version {}, HTTP/2 enabled",
        protocol_name(MIN_TLS_VERSION)
    );

    Ok(HyperClientBuilder::new().build(connector))
}
