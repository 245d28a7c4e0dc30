// self
use oauth1_request_auth::{
	credentials::{
		HmacSha1Signer, HmacSha256Signer, PlaintextSigner, SignatureMethod, Signer, SigningInput,
	},
	error::Error,
	protocol::BaseString,
	url::Url,
};

const CONSUMER_SECRET: &str = "kd94hf93k423kf44";
const TOKEN_SECRET: &str = "pfkkdhi9sl3r4s00";
const PHOTOS_BASE_STRING: &str = "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal";

fn photos_base_string() -> BaseString {
	let url = Url::parse("http://photos.example.net/photos?file=vacation.jpg&size=original")
		.expect("Photos fixture URL should parse.");

	BaseString::new(
		"GET",
		&url,
		[
			("oauth_consumer_key", "dpf43f3p2l4k3l03"),
			("oauth_token", "nnch734d00sl2jdk"),
			("oauth_signature_method", "HMAC-SHA1"),
			("oauth_timestamp", "1191242096"),
			("oauth_nonce", "kllo9940pd9333jh"),
			("oauth_version", "1.0"),
		],
	)
	.expect("Photos base string should build.")
}

#[test]
fn hmac_sha1_matches_the_protocol_example() {
	let base = photos_base_string();

	assert_eq!(base.as_str(), PHOTOS_BASE_STRING);

	let signature = HmacSha1Signer
		.sign(base.as_str(), CONSUMER_SECRET, TOKEN_SECRET)
		.expect("HMAC-SHA1 signing should succeed.");

	assert_eq!(signature.as_str(), "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
	assert!(
		HmacSha1Signer
			.verify(base.as_str(), CONSUMER_SECRET, TOKEN_SECRET, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=")
			.expect("Verification should succeed.")
	);
}

#[test]
fn signing_is_deterministic_for_every_method() {
	for method in
		[SignatureMethod::HmacSha1, SignatureMethod::HmacSha256, SignatureMethod::Plaintext]
	{
		let signer = method.signer();
		let first = signer
			.sign(PHOTOS_BASE_STRING, CONSUMER_SECRET, TOKEN_SECRET)
			.expect("First signature should succeed.");
		let second = signer
			.sign(PHOTOS_BASE_STRING, CONSUMER_SECRET, TOKEN_SECRET)
			.expect("Second signature should succeed.");

		assert_eq!(first, second, "{method} must be deterministic.");
	}
}

#[test]
fn each_secret_changes_the_signature() {
	let signers: [&dyn Signer; 2] = [&HmacSha1Signer, &HmacSha256Signer];

	for signer in signers {
		let baseline = signer
			.sign(PHOTOS_BASE_STRING, CONSUMER_SECRET, TOKEN_SECRET)
			.expect("Baseline signature should succeed.");
		let client_changed = signer
			.sign(PHOTOS_BASE_STRING, "other-client", TOKEN_SECRET)
			.expect("Client-changed signature should succeed.");
		let credential_changed = signer
			.sign(PHOTOS_BASE_STRING, CONSUMER_SECRET, "other-token")
			.expect("Credential-changed signature should succeed.");

		assert_ne!(baseline, client_changed);
		assert_ne!(baseline, credential_changed);
	}
}

#[test]
fn empty_secrets_sign_and_differ_from_set_secrets() {
	let empty = HmacSha1Signer
		.sign(PHOTOS_BASE_STRING, "", "")
		.expect("Empty secrets are valid for HMAC-SHA1.");
	let client_only =
		HmacSha1Signer.sign(PHOTOS_BASE_STRING, "a", "").expect("Client secret should sign.");

	assert_ne!(empty, client_only);
	assert_eq!(
		PlaintextSigner.sign(PHOTOS_BASE_STRING, "", "").map(|s| s.into_inner()),
		Ok("&".to_owned())
	);
}

#[test]
fn missing_arguments_fail_with_invalid_argument() {
	let err = SigningInput::builder()
		.base_string(PHOTOS_BASE_STRING)
		.credential_secret(TOKEN_SECRET)
		.build()
		.expect_err("A missing client secret must not be coerced to empty.");

	assert!(matches!(err, Error::InvalidArgument { argument: "client_secret", .. }));

	let err = HmacSha1Signer
		.sign("", CONSUMER_SECRET, TOKEN_SECRET)
		.expect_err("An empty base string must be rejected.");

	assert!(matches!(err, Error::InvalidArgument { argument: "base_string", .. }));
}

#[test]
fn signing_input_matches_direct_signing() {
	let input = SigningInput::builder()
		.base_string(PHOTOS_BASE_STRING)
		.client_secret(CONSUMER_SECRET)
		.credential_secret(TOKEN_SECRET)
		.build()
		.expect("Complete signing input should build.");
	let method: SignatureMethod =
		"HMAC-SHA1".parse().expect("HMAC-SHA1 should be a supported method.");
	let signature =
		input.sign_with(method.signer().as_ref()).expect("Signing input should sign.");

	assert_eq!(signature.as_str(), "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
	assert!(!format!("{input:?}").contains(CONSUMER_SECRET), "Secrets must stay redacted.");
}
