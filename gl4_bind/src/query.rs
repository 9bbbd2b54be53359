use crate::{
    marshal,
    types::{GLenum, GLuint, GLuint64},
    BindResult, Gl,
};

impl Gl {
    pub fn gen_queries(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenQueries(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_queries(&self, target: GLenum, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateQueries(target, marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_queries(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteQueries(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    pub fn query_result_available(&self, query: GLuint) -> bool {
        let mut available = 0;
        unsafe { self.GetQueryObjectuiv(query, gl::QUERY_RESULT_AVAILABLE, &mut available) };
        available != 0
    }

    /// Blocks until the result is available.
    pub fn query_result_u64(&self, query: GLuint) -> GLuint64 {
        let mut result = 0;
        unsafe { self.GetQueryObjectui64v(query, gl::QUERY_RESULT, &mut result) };
        result
    }

    /// The result if it is ready, without blocking.
    pub fn try_query_result_u64(&self, query: GLuint) -> Option<GLuint64> {
        let mut result = 0;
        unsafe { self.GetQueryObjectui64v(query, gl::QUERY_RESULT_NO_WAIT, &mut result) };
        self.query_result_available(query).then_some(result)
    }
}
