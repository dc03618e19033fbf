use crate::generator::naming::paths::{PathStrategy, request_class_name, request_uri};

#[test]
fn test_drop_parameters_normalization() {
  let strategy = PathStrategy::DropParameters;
  assert_eq!(strategy.normalize("/users/{id}/posts"), "users/posts");
  assert_eq!(strategy.normalize("/users/{id}"), "users");
  assert_eq!(strategy.normalize("/pets"), "pets");
  assert_eq!(strategy.normalize("/"), "");
}

#[test]
fn test_more_specificity_normalization() {
  let strategy = PathStrategy::MoreSpecificity;
  assert_eq!(strategy.normalize("/users/{id}/posts"), "users/id/posts");
  assert_eq!(strategy.normalize("/users/{userId}"), "users/userId");
  assert_eq!(strategy.normalize("/pets"), "pets");
}

#[test]
fn test_from_flag() {
  assert_eq!(PathStrategy::from_flag(false), PathStrategy::DropParameters);
  assert_eq!(PathStrategy::from_flag(true), PathStrategy::MoreSpecificity);
  assert_eq!(PathStrategy::default(), PathStrategy::DropParameters);
}

#[test]
fn test_request_class_name_per_strategy() {
  let template = "/users/{id}/posts";
  let default_name = request_class_name("get", &PathStrategy::DropParameters.normalize(template));
  let specific_name = request_class_name("get", &PathStrategy::MoreSpecificity.normalize(template));
  assert_eq!(default_name, "GetUsersPosts");
  assert_eq!(specific_name, "GetUsersIdPosts");
}

#[test]
fn test_request_class_name_normalizes_method_case() {
  assert_eq!(request_class_name("DELETE", "pets"), "DeletePets");
  assert_eq!(request_class_name("post", ""), "Post");
}

#[test]
fn test_request_uri() {
  assert_eq!(request_uri("/v2", "pets"), "/v2/pets");
  assert_eq!(request_uri("/v2/", "pets"), "/v2/pets");
  assert_eq!(request_uri("", "pets"), "/pets");
  assert_eq!(request_uri("/v2", ""), "/v2/");
}
