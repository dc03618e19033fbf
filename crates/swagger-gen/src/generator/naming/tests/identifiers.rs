use crate::generator::naming::identifiers::{
  accessor_name, capitalize, drop_trailing_char, namespace_segments, path_to_identifier, sanitize, singularize,
  snake_to_camel, to_method_name, to_module_name, to_rust_field_name, to_rust_type_name,
};

#[test]
fn test_drop_trailing_char() {
  assert_eq!(drop_trailing_char("/v1/", '/'), "/v1");
  assert_eq!(drop_trailing_char("/v1", '/'), "/v1");
  assert_eq!(drop_trailing_char("", '/'), "");
  assert_eq!(drop_trailing_char("Acme\\", '\\'), "Acme");
}

#[test]
fn test_capitalize() {
  assert_eq!(capitalize("get"), "Get");
  assert_eq!(capitalize("user_id"), "User_id");
  assert_eq!(capitalize(""), "");
}

#[test]
fn test_path_to_identifier() {
  let cases = [
    ("users/posts", "UsersPosts"),
    ("users", "Users"),
    ("pet-store/items", "PetStoreItems"),
    ("users//posts", "UsersPosts"),
    ("", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(path_to_identifier(input), expected, "failed for {input:?}");
  }
}

#[test]
fn test_singularize_examples() {
  assert_eq!(singularize("categories"), "category");
  assert_eq!(singularize("tags"), "tag");
  assert_eq!(singularize("data"), "data");
  assert_eq!(singularize("Tags"), "Tag");
  assert_eq!(singularize("address"), "address");
}

#[test]
fn test_singularize_is_idempotent() {
  let words = [
    "categories",
    "tags",
    "data",
    "boxes",
    "status",
    "series",
    "class",
    "s",
    "ies",
    "photoUrls",
    "",
  ];
  for word in words {
    let once = singularize(word);
    assert_eq!(singularize(&once), once, "singularize not idempotent for {word:?}");
  }
}

#[test]
fn test_snake_to_camel() {
  assert_eq!(snake_to_camel("pet_id"), "petId");
  assert_eq!(snake_to_camel("name"), "name");
  assert_eq!(snake_to_camel("_links"), "links");
  assert_eq!(snake_to_camel("photo_urls_list"), "photoUrlsList");
}

#[test]
fn test_accessor_name() {
  assert_eq!(accessor_name("pet_id"), "PetId");
  assert_eq!(accessor_name("tags"), "Tags");
  assert_eq!(accessor_name("photoUrls"), "PhotoUrls");
}

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("user-name"), "user_name");
  assert_eq!(sanitize("  spaced  out "), "spaced_out");
  assert_eq!(sanitize("café"), "cafe");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_to_rust_type_name() {
  assert_eq!(to_rust_type_name("GetUsersPosts"), "GetUsersPosts");
  assert_eq!(to_rust_type_name("GetUsersUser_id"), "GetUsersUserId");
  assert_eq!(to_rust_type_name("pet"), "Pet");
  assert_eq!(to_rust_type_name("pet-store"), "PetStore");
  assert_eq!(to_rust_type_name("Vec"), "VecType");
  assert_eq!(to_rust_type_name("Self"), "SelfType");
  assert_eq!(to_rust_type_name(""), "Unnamed");
}

#[test]
fn test_to_rust_field_name() {
  assert_eq!(to_rust_field_name("petId"), "pet_id");
  assert_eq!(to_rust_field_name("type"), "r#type");
  assert_eq!(to_rust_field_name("self"), "self_");
  assert_eq!(to_rust_field_name("super"), "super_");
  assert_eq!(to_rust_field_name("2fa"), "_2fa");
  assert_eq!(to_rust_field_name("---"), "_");
}

#[test]
fn test_to_module_name() {
  assert_eq!(to_module_name("GetUsersPosts"), "get_users_posts");
  assert_eq!(to_module_name("Type"), "type_");
}

#[test]
fn test_namespace_segments() {
  assert_eq!(namespace_segments("Acme::PetStore"), ["acme", "pet_store"]);
  assert_eq!(namespace_segments("Acme\\PetStore\\"), ["acme", "pet_store"]);
  assert_eq!(namespace_segments("api"), ["api"]);
  assert!(namespace_segments("").is_empty());
}

#[test]
fn test_to_method_name() {
  assert_eq!(to_method_name("get", "PhotoUrls"), "get_photo_urls");
  assert_eq!(to_method_name("set", "Type"), "set_type");
  assert_eq!(to_method_name("add", "Tag"), "add_tag");
  assert_eq!(to_method_name("set", ""), "set");
}
