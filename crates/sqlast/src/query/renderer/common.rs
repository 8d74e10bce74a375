use crate::query::{
    ast::common::{Ident, ObjectName},
    renderer::{Render, Renderer},
};

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.0);
    }
}

impl Render for ObjectName {
    fn render(&self, r: &mut Renderer) {
        for (i, part) in self.parts().iter().enumerate() {
            if i > 0 {
                r.sql.push('.');
            }
            part.render(r);
        }
    }
}
