use bunner_request_rs::{AcceptList, RequestContext, RequestError};

pub fn assert_valid(ctx: &RequestContext) {
    if let Err(error) = ctx.validate() {
        panic!("expected valid request, got {:?}", error);
    }
}

pub fn assert_bad_request(result: Result<(), RequestError>) -> String {
    match result {
        Err(RequestError::BadRequest(message)) => message,
        other => panic!("expected bad request, got {:?}", other),
    }
}

pub fn preference(list: &AcceptList) -> Vec<(String, f64)> {
    list.iter()
        .map(|entry| (entry.name().to_string(), entry.quality()))
        .collect()
}
