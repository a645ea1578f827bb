//! 业务模型与 HTTP 请求/响应模型

pub mod common {
    pub mod response;
    pub use response::*;
}

pub mod users {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod auth {
    pub mod requests;
    pub mod responses;
}

pub mod classes {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod class_students {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod languages {
    pub mod entities;
    pub mod requests;
}

pub mod assignments {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod submissions {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub use common::*;
